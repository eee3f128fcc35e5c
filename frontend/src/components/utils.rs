use gloo_file::File as GlooFile;
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::FileList;
use yew::prelude::*;

pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

const ACCEPTED_MIME_TYPES: [&str; 2] = ["image/png", "image/jpeg"];

/// Upload boundary policy: raster format and size are checked before any
/// extraction is attempted. Returns the notice shown to the user on
/// rejection.
pub fn validate_upload(mime: &str, size: u64) -> Result<(), String> {
    if !ACCEPTED_MIME_TYPES.contains(&mime) {
        return Err(format!(
            "Unsupported file type \"{}\". Please upload a PNG or JPG image.",
            mime
        ));
    }
    if size > MAX_UPLOAD_BYTES {
        return Err("Image is larger than the 10MB limit.".to_string());
    }
    Ok(())
}

/// Single-image upload: only the first file of a selection or drop is used.
pub fn first_file(file_list: &FileList) -> Option<GlooFile> {
    file_list.item(0).map(GlooFile::from)
}

// Debounce function to limit button events
pub fn debounce<F>(duration: i32, callback: F) -> Callback<MouseEvent>
where
    F: Fn() + Clone + 'static,
{
    let timeout = Rc::new(RefCell::new(None::<Timeout>));
    let timeout_clone = Rc::clone(&timeout);

    Callback::from(move |_| {
        let mut timeout_ref = timeout_clone.borrow_mut();

        if let Some(old_timeout) = timeout_ref.take() {
            old_timeout.cancel();
        }

        let inner_callback = callback.clone();
        let new_timeout = Timeout::new(duration as u32, move || {
            inner_callback();
        });

        *timeout_ref = Some(new_timeout);
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn png_and_jpeg_within_cap_are_accepted() {
        assert!(validate_upload("image/png", 1024).is_ok());
        assert!(validate_upload("image/jpeg", MAX_UPLOAD_BYTES).is_ok());
    }

    #[test]
    fn other_types_are_rejected_before_extraction() {
        assert!(validate_upload("image/gif", 1024).is_err());
        assert!(validate_upload("application/pdf", 1024).is_err());
        assert!(validate_upload("", 1024).is_err());
    }

    #[test]
    fn oversized_uploads_are_rejected() {
        assert!(validate_upload("image/png", MAX_UPLOAD_BYTES + 1).is_err());
    }
}
