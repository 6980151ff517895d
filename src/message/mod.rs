mod id;
mod page;
mod types;
mod validation;

pub use id::{INVALID_ID, InvalidMessageId, parse_message_id};
pub use page::{DEFAULT_PAGE_SIZE, Page, PageRequest};
pub use types::{Message, MessageRequest, timestamp};
pub use validation::{AUTHOR_EMPTY, CONTENT_EMPTY, FieldError};
