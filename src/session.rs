//! One request/response exchange per call, driven through the shared state
//! machines

use crate::client::KisanClient;
use crate::error::Result;
use crate::image_file::{read_image, FilePreview};
use kisan_common::{ChatSession, Diagnosis, UploadState};
use std::path::Path;

/// Select an image file, replacing any previous selection
pub async fn select_file(state: &mut UploadState<FilePreview>, path: &Path) -> Result<()> {
    let (selection, preview) = read_image(path).await?.into_selection();
    state.select(selection, preview)?;
    Ok(())
}

/// Upload the selected image and store the diagnosis in `state`
pub async fn upload_and_diagnose(
    client: &KisanClient,
    state: &mut UploadState<FilePreview>,
) -> Result<Diagnosis> {
    let selected = state.begin_upload()?.clone();
    let bytes = state
        .preview()
        .map(|p| p.bytes().to_vec())
        .unwrap_or_default();

    let outcome = client
        .diagnose(&selected.file_name, &selected.mime_type, bytes)
        .await
        .map_err(|e| e.into_common());

    if let Err(e) = &outcome {
        tracing::warn!(file_name = %selected.file_name, error = %e, "upload failed");
    }

    state.finish_upload(outcome)?;
    Ok(state.diagnosis().cloned().unwrap_or_default())
}

/// Send one user message and return the assistant's reply
pub async fn chat_turn(client: &KisanClient, session: &mut ChatSession, input: &str) -> Result<String> {
    let request = session.submit(input)?;

    let outcome = client
        .send_chat(&request)
        .await
        .map_err(|e| e.into_common());

    if let Err(e) = &outcome {
        tracing::warn!(error = %e, "chat request failed");
    }

    session.complete(outcome)?;
    let reply = session
        .transcript()
        .conversation()
        .last()
        .map(|m| m.content.clone())
        .unwrap_or_default();
    Ok(reply)
}
