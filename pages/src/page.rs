// pages/src/page.rs
//
// Glue between one resource's list controller, modal, and gateway client.
// Control flow per the admin pages: rows render from `visible_items()`, a
// user action opens the modal in a mode, submit runs the draft through
// client-side validation and then the gateway, and success closes the modal
// and re-fetches the whole collection. Failures never lose state: the modal
// stays open with the draft intact.

use log::{debug, info};

use gateway::{GatewayError, ResourceClient, ResourceDescriptor};
use models::Draft;

use crate::list_controller::{FilterSet, ListController, Searchable};
use crate::modal::ModalLifecycle;
use crate::notify::ToastSender;

pub struct ResourcePage<R, D, F>
where
    R: ResourceDescriptor + Searchable,
    D: Draft<Entity = R>,
    F: FilterSet<R>,
{
    name: &'static str,
    pub list: ListController<R, F>,
    pub modal: ModalLifecycle<R, D>,
    client: ResourceClient<R>,
    toasts: ToastSender,
    loading: bool,
    epoch: u64,
}

impl<R, D, F> ResourcePage<R, D, F>
where
    R: ResourceDescriptor + Searchable,
    D: Draft<Entity = R>,
    F: FilterSet<R>,
{
    pub fn new(name: &'static str, client: ResourceClient<R>, toasts: ToastSender) -> Self {
        ResourcePage {
            name,
            list: ListController::new(),
            modal: ModalLifecycle::new(),
            client,
            toasts,
            loading: false,
            epoch: 0,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// In-flight mutation guard; render layers disable the submit control
    /// while this is set. A UI guard, not a mutex.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn client(&self) -> &ResourceClient<R> {
        &self.client
    }

    /// Stamp a new request. The returned epoch must still be current when
    /// the response lands, otherwise the response is stale and dropped.
    pub fn begin_request(&mut self) -> u64 {
        self.epoch += 1;
        self.epoch
    }

    /// Invalidate every in-flight request (page switch, manual reload).
    pub fn invalidate(&mut self) {
        self.epoch += 1;
    }

    /// Applies a fetched collection unless a newer request superseded it.
    pub fn apply_items(&mut self, epoch: u64, items: Vec<R>) -> bool {
        if epoch != self.epoch {
            debug!("{}: dropping stale list response", self.name);
            return false;
        }
        self.list.replace_items(items);
        true
    }

    /// Re-fetches the whole collection; the only way `list.items` changes.
    pub async fn refresh(&mut self) {
        let epoch = self.begin_request();
        match self.client.list().await {
            Ok(items) => {
                if self.apply_items(epoch, items) {
                    debug!("{}: {} rows", self.name, self.list.len());
                }
            }
            Err(err) => {
                debug!("{}: list failed: {}", self.name, err);
                self.toasts.error(format!("Failed to load {}", self.name));
            }
        }
    }

    pub fn open_add(&mut self) {
        self.modal.open_add();
    }

    pub fn open_edit(&mut self, entity: &R) {
        self.modal.open_edit(entity);
    }

    pub fn open_view(&mut self, entity: R) {
        self.modal.open_view(entity);
    }

    pub fn open_delete(&mut self, entity: R) {
        self.modal.open_delete(entity);
    }

    pub fn cancel(&mut self) {
        self.modal.cancel();
    }

    /// Submits the open add/edit form. Client-side validation failures land
    /// in the modal's error map before any request is made; server-side
    /// validation failures land there after. Either way the modal stays
    /// open and the draft is untouched.
    pub async fn submit(&mut self) {
        let Some((target, draft)) = self.modal.submit_target() else {
            return;
        };
        if self.loading {
            debug!("{}: submit ignored, mutation in flight", self.name);
            return;
        }

        let entity = match draft.validate() {
            Ok(entity) => entity,
            Err(errors) => {
                self.modal.set_errors(errors);
                return;
            }
        };

        self.loading = true;
        let result = match target {
            Some(id) => self.client.update(id, &entity).await,
            None => self.client.create(&entity).await,
        };
        self.loading = false;

        match result {
            Ok(_) => {
                info!("{}: saved", self.name);
                self.toasts.success(format!("Saved {}", self.name));
                self.modal.close();
                self.refresh().await;
            }
            Err(GatewayError::Validation(errors)) => {
                self.modal.set_errors(errors);
            }
            Err(err) => {
                debug!("{}: save failed: {}", self.name, err);
                self.toasts.error(format!("Failed to save {}", self.name));
            }
        }
    }

    /// Runs the confirmed delete. Success removes exactly the targeted id
    /// via the follow-up refresh; failure keeps the confirm dialog open.
    pub async fn confirm_delete(&mut self) {
        let Some(id) = self.modal.delete_target() else {
            return;
        };
        if self.loading {
            return;
        }

        self.loading = true;
        let result = self.client.delete(id).await;
        self.loading = false;

        match result {
            Ok(()) => {
                self.toasts.success(format!("Deleted {}", self.name));
                self.modal.close();
                self.refresh().await;
            }
            Err(err) => {
                debug!("{}: delete failed: {}", self.name, err);
                self.toasts.error(format!("Failed to delete {}", self.name));
            }
        }
    }
}

/// List + view only; the pages that never grew mutation wiring (messages,
/// lab results, med samples, records).
pub struct ReadOnlyPage<R, F>
where
    R: ResourceDescriptor + Searchable,
    F: FilterSet<R>,
{
    name: &'static str,
    pub list: ListController<R, F>,
    viewing: Option<R>,
    client: ResourceClient<R>,
    toasts: ToastSender,
    epoch: u64,
}

impl<R, F> ReadOnlyPage<R, F>
where
    R: ResourceDescriptor + Searchable,
    F: FilterSet<R>,
{
    pub fn new(name: &'static str, client: ResourceClient<R>, toasts: ToastSender) -> Self {
        ReadOnlyPage {
            name,
            list: ListController::new(),
            viewing: None,
            client,
            toasts,
            epoch: 0,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn viewing(&self) -> Option<&R> {
        self.viewing.as_ref()
    }

    pub fn open_view(&mut self, entity: R) {
        self.viewing = Some(entity);
    }

    pub fn close_view(&mut self) {
        self.viewing = None;
    }

    pub fn invalidate(&mut self) {
        self.epoch += 1;
    }

    pub async fn refresh(&mut self) {
        self.epoch += 1;
        let epoch = self.epoch;
        match self.client.list().await {
            Ok(items) => {
                if epoch == self.epoch {
                    self.list.replace_items(items);
                }
            }
            Err(err) => {
                debug!("{}: list failed: {}", self.name, err);
                self.toasts.error(format!("Failed to load {}", self.name));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::toast_channel;
    use crate::resources::rooms::RoomsPage;
    use gateway::testing::StubTransport;
    use gateway::GatewayError;
    use models::medical::RoomType;
    use serde_json::json;
    use std::sync::Arc;

    fn room_json(id: i32, name: &str) -> serde_json::Value {
        json!({
            "id": id,
            "name": name,
            "room_type": "Examination",
            "capacity": 2,
            "status": "Available",
            "equipment": []
        })
    }

    fn page(transport: Arc<StubTransport>) -> RoomsPage {
        let (toasts, _rx) = toast_channel(16);
        RoomsPage::new("rooms", ResourceClient::new(transport), toasts)
    }

    #[tokio::test]
    async fn server_validation_keeps_modal_open_with_errors() {
        let transport = Arc::new(StubTransport::new());
        transport.stub(
            "POST",
            "rooms",
            Ok(json!({ "success": false, "errors": { "name": "required" } })),
        );
        let mut page = page(transport);
        page.open_add();
        {
            let draft = page.modal.draft_mut().unwrap();
            draft.name = "Exam 9".into();
            draft.room_type = Some(RoomType::Examination);
            draft.capacity = "2".into();
        }
        page.submit().await;
        assert!(page.modal.is_open(), "validation failure must not close the modal");
        assert_eq!(
            page.modal.errors().unwrap().get("name").map(String::as_str),
            Some("required")
        );
        let (_, draft) = page.modal.submit_target().unwrap();
        assert_eq!(draft.name, "Exam 9", "draft must survive a rejected submit");
    }

    #[tokio::test]
    async fn client_validation_never_reaches_the_wire() {
        let transport = Arc::new(StubTransport::new());
        let mut page = page(transport.clone());
        page.open_add();
        page.modal.draft_mut().unwrap().capacity = "lots".into();
        page.submit().await;
        assert!(transport.calls().is_empty());
        assert!(page.modal.errors().unwrap().contains_key("capacity"));
    }

    #[tokio::test]
    async fn delete_removes_exactly_the_target_after_refresh() {
        let transport = Arc::new(StubTransport::new());
        transport.stub(
            "GET",
            "rooms",
            Ok(json!({ "success": true, "rooms": [room_json(1, "Exam 1"), room_json(2, "Exam 2")] })),
        );
        let mut page = page(transport.clone());
        page.refresh().await;
        assert_eq!(page.list.len(), 2);

        let target = page.list.items()[1].clone();
        transport.stub("DELETE", "rooms/2", Ok(json!({ "success": true })));
        transport.stub(
            "GET",
            "rooms",
            Ok(json!({ "success": true, "rooms": [room_json(1, "Exam 1")] })),
        );
        page.open_delete(target);
        page.confirm_delete().await;

        assert!(!page.modal.is_open());
        let remaining: Vec<i32> = page.list.items().iter().map(|r| r.id).collect();
        assert_eq!(remaining, vec![1]);
    }

    #[tokio::test]
    async fn failed_refresh_keeps_previous_items() {
        let transport = Arc::new(StubTransport::new());
        transport.stub(
            "GET",
            "rooms",
            Ok(json!({ "success": true, "rooms": [room_json(1, "Exam 1")] })),
        );
        let mut page = page(transport.clone());
        page.refresh().await;
        assert_eq!(page.list.len(), 1);

        transport.stub("GET", "rooms", Err(GatewayError::Status { code: 500 }));
        page.refresh().await;
        assert_eq!(page.list.len(), 1, "failure leaves prior state intact");
    }

    #[tokio::test]
    async fn stale_response_is_dropped_by_the_epoch_guard() {
        let transport = Arc::new(StubTransport::new());
        let mut page = page(transport);
        let stale_epoch = page.begin_request();
        // a newer request (or navigation) supersedes the one in flight
        page.invalidate();
        let applied = page.apply_items(
            stale_epoch,
            vec![serde_json::from_value(room_json(9, "Late")).unwrap()],
        );
        assert!(!applied);
        assert!(page.list.is_empty());
    }
}
