use super::error::ExtractError;
use crate::shared::api_utils::api_url;
use contracts::usecases::u101_invoice_extraction::{ExtractionResponse, EXTRACT_PATH, FILE_FIELD};
use gloo_net::http::Request;
use web_sys::FormData;

/// POST the document as multipart form data and decode the extraction result.
///
/// No retry and no timeout: the future resolves once, however long the
/// service takes.
pub async fn extract_document(file: web_sys::File) -> Result<ExtractionResponse, ExtractError> {
    let form_data = FormData::new().map_err(|e| ExtractError::Request(format!("{e:?}")))?;
    form_data
        .append_with_blob_and_filename(FILE_FIELD, &file, &file.name())
        .map_err(|e| ExtractError::Request(format!("{e:?}")))?;

    let url = api_url(EXTRACT_PATH);
    let response = Request::post(&url)
        .body(form_data)
        .map_err(|e| ExtractError::Request(e.to_string()))?
        .send()
        .await
        .map_err(|e| ExtractError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(ExtractError::Status(response.status()));
    }

    let text = response
        .text()
        .await
        .map_err(|e| ExtractError::Network(e.to_string()))?;
    let data: ExtractionResponse = serde_json::from_str(&text)?;

    Ok(data)
}
