pub mod message_list;
pub mod post_form;
