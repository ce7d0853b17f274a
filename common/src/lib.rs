//! Common library exports shared between the search connector and the presentation layer.

extern crate serde;


pub mod search_const;
pub mod search_state;
pub mod search_request;
pub mod backend_response;
pub mod search_result;
pub mod click_event;
