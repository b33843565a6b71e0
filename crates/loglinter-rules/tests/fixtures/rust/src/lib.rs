use tracing::{info, warn};

pub fn handle(logger: &Logger, dynamic_msg: &str, user: &str) {
    logger.error("Something failed");
    logger.info("началась обработка");
    logger.warn("disk space low 🔥");
    logger.debug("user password is 12345");
    logger.info(dynamic_msg);
    logger.info("ok");

    info!(user = %user, "Session started");
    warn!(target: "auth", "token refreshed for {}", user);
    tracing::error!(?user, "lookup failed");
    log::debug!("cache warm");
    println!("Not a log call");
}
