use crate::config::constants::FILE_FIELD;
use crate::models::selected_file_dao::SelectedFile;
use reqwest::multipart::{Form, Part};

/// Single-field form, `file` carrying the bytes, name and media type.
/// The boundary and the request content type come from the encoder.
pub fn build_form(file: SelectedFile) -> Result<Form, reqwest::Error> {
    let length = file.size();
    let part = Part::stream_with_length(file.bytes, length)
        .file_name(file.name)
        .mime_str(&file.media_type)?;

    Ok(Form::new().part(FILE_FIELD, part))
}
