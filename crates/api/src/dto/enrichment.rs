use serde::Deserialize;

/// Body of `POST /disasters/geocode`; a missing field is reported as 400, not 422.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeocodeRequest {
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct VerifyImageRequest {
    #[serde(default)]
    pub image_url: Option<String>,
}
