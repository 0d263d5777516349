// pages/src/lib.rs
//
// The reusable CRUD page core shared by every admin page: a list controller
// (search + filters over a fetched collection), a modal lifecycle state
// machine holding the draft and its field errors, and the page glue that
// runs mutations through the gateway and re-fetches on success.

pub mod analytics;
pub mod fixtures;
pub mod list_controller;
pub mod modal;
pub mod notify;
pub mod page;
pub mod resources;
pub mod settings_page;

pub use list_controller::{FilterSet, ListController, Searchable};
pub use modal::{ModalLifecycle, ModalState};
pub use notify::{toast_channel, Toast, ToastLevel, ToastSender};
pub use page::{ReadOnlyPage, ResourcePage};
pub use settings_page::SettingsPage;
