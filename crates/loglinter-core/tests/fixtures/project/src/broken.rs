fn broken( {
    log.info("never parsed");
}
