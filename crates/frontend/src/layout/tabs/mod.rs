//! Tab management module
//!
//! Содержит:
//! - `keys` - разбор ключа таба в [`TabRoute`]
//! - `page` - компонент TabPage для обёртки контента таба
//! - `registry` - маппинг TabRoute → View
//! - `tab_labels` - единственный источник правды для заголовков табов

pub mod keys;
pub mod page;
pub mod registry;
pub mod tab_labels;

pub use keys::TabRoute;
pub use page::TabPage;
pub use tab_labels::{detail_tab_label, tab_label_for_key};
