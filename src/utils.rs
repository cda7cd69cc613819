pub fn get_md5(s: &str) -> String {
    let digest = md5::compute(s);
    format!("{:x}", digest)
}

/// Unique token naming one request's scratch sub-directory.
pub fn request_token(message_id: &str) -> String {
    let nanos = chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default();
    get_md5(&format!("{}:{}", message_id, nanos))
}
