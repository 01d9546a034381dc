//! HTML handlers for the public pages.

mod new_url;
mod short_link;

pub use new_url::{NewUrlForm, NewUrlTemplate, new_url_form, submit_url};
pub use short_link::{LinkPath, ShortLinkDetailsTemplate, not_found_handler, short_link_handler};
