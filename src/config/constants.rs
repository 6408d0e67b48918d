pub const PROCESS_ENDPOINT: &str = "/process";
pub const FILE_FIELD: &str = "file";

pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";
pub const SERVER_URL_ENV: &str = "UPLOADER_SERVER_URL";
pub const CONFIG_FILE_ENV: &str = "UPLOADER_CONFIG";

pub const DEFAULT_FILE_NAME: &str = "upload";
