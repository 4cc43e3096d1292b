pub const CONFIG_FILE_NAME: &str = "sukatoken.json";
pub const UNK_TOKEN: &str = "<UNK>";

// `SUKATOKEN_LOG=log.txt suku build-vocab ...`
pub const LOG_ENV_VAR: &str = "SUKATOKEN_LOG";
