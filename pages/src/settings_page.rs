// pages/src/settings_page.rs
//
// Settings are one form, not a list: a single draft that loads from the
// backend, validates locally, and saves through the gateway with the same
// field-error round-trip as the modal forms.

use log::debug;

use gateway::{GatewayError, SettingsClient};
use models::medical::SettingsDraft;
use models::{Draft, FieldErrors};

use crate::notify::ToastSender;

pub struct SettingsPage {
    pub draft: SettingsDraft,
    pub errors: FieldErrors,
    client: SettingsClient,
    toasts: ToastSender,
    loading: bool,
}

impl SettingsPage {
    pub fn new(client: SettingsClient, toasts: ToastSender) -> Self {
        SettingsPage {
            draft: SettingsDraft::default(),
            errors: FieldErrors::new(),
            client,
            toasts,
            loading: false,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub async fn load(&mut self) {
        match self.client.fetch().await {
            Ok(settings) => {
                self.draft = SettingsDraft::from_entity(&settings);
                self.errors.clear();
            }
            Err(err) => {
                debug!("settings: load failed: {}", err);
                self.toasts.error("Failed to load settings");
            }
        }
    }

    pub async fn save(&mut self) {
        if self.loading {
            return;
        }
        let settings = match self.draft.validate() {
            Ok(settings) => settings,
            Err(errors) => {
                self.errors = errors;
                return;
            }
        };

        self.loading = true;
        let result = self.client.save(&settings).await;
        self.loading = false;

        match result {
            Ok(()) => {
                self.errors.clear();
                self.toasts.success("Settings saved");
            }
            Err(GatewayError::Validation(errors)) => {
                self.errors = errors;
            }
            Err(err) => {
                debug!("settings: save failed: {}", err);
                self.toasts.error("Failed to save settings");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::toast_channel;
    use gateway::testing::StubTransport;
    use serde_json::json;
    use std::sync::Arc;

    fn page(transport: Arc<StubTransport>) -> SettingsPage {
        let (toasts, _rx) = toast_channel(8);
        SettingsPage::new(SettingsClient::new(transport), toasts)
    }

    #[tokio::test]
    async fn load_populates_the_draft() {
        let transport = Arc::new(StubTransport::new());
        transport.stub(
            "GET",
            "settings",
            Ok(json!({
                "success": true,
                "settings": {
                    "clinic_name": "Westside Clinic",
                    "address": "1 Main St",
                    "phone": "555-0100",
                    "email": "front@westside.example",
                    "opening_time": "08:00",
                    "closing_time": "18:00",
                    "slot_minutes": 20
                }
            })),
        );
        let mut page = page(transport);
        page.load().await;
        assert_eq!(page.draft.clinic_name, "Westside Clinic");
        assert_eq!(page.draft.slot_minutes, "20");
    }

    #[tokio::test]
    async fn invalid_draft_never_reaches_the_wire() {
        let transport = Arc::new(StubTransport::new());
        let mut page = page(transport.clone());
        page.draft.clinic_name = "Westside".into();
        page.draft.email = "nope".into();
        page.draft.opening_time = "08:00".into();
        page.draft.closing_time = "18:00".into();
        page.draft.slot_minutes = "30".into();
        page.save().await;
        assert!(transport.calls().is_empty());
        assert!(page.errors.contains_key("email"));
    }
}
