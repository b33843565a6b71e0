pub fn run(log: &Logger) {
    log.info("worker ready");
    log.debug("tick");
}
