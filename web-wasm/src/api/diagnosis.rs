//! Plant-disease classification endpoint

use super::{fetch_text, network_error};
use kisan_common::{Diagnosis, Result};
use web_sys::{File, FormData, RequestInit, RequestMode};

/// Multipart field the endpoint reads the image from
const IMAGE_FIELD: &str = "image";

/// Upload one image as multipart form data
pub async fn submit_image(endpoint: &str, file: &File) -> Result<Diagnosis> {
    let form = FormData::new().map_err(network_error)?;
    form.append_with_blob_and_filename(IMAGE_FIELD, file, &file.name())
        .map_err(network_error)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&form.into());

    let body = fetch_text(endpoint, &opts).await?;
    Diagnosis::from_json(&body)
}
