use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct GuidanceViewModel {
    pub config_exists: bool,
    pub endpoint_configured: bool,
}
