//! Google Identity Services bridge.
//!
//! Invokes the One Tap / credential prompt programmatically, so the
//! visible sign-in control can be styled freely instead of proxying clicks
//! into a hidden vendor widget. Requires the GIS client script
//! (`https://accounts.google.com/gsi/client`) on the page.

use async_trait::async_trait;
use futures::channel::oneshot;
use js_sys::{Function, Object, Reflect};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

use super::{IdentityProvider, PROMPT_END_CHECKS};
use crate::services::errors::{ApiError, ApiResult};
use crate::{console_debug, console_warn};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["google", "accounts", "id"], js_name = initialize, catch)]
    fn gis_initialize(config: &JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(js_namespace = ["google", "accounts", "id"], js_name = prompt, catch)]
    fn gis_prompt(listener: &JsValue) -> Result<(), JsValue>;
}

type CredentialSender = Rc<RefCell<Option<oneshot::Sender<Option<String>>>>>;

#[derive(Debug, Clone)]
pub struct GoogleIdentity {
    client_id: String,
}

impl GoogleIdentity {
    pub fn new(client_id: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
        }
    }
}

fn settle(sender: &CredentialSender, value: Option<String>) {
    if let Some(tx) = sender.borrow_mut().take() {
        let _ = tx.send(value);
    }
}

fn call_bool_method(target: &JsValue, name: &str) -> bool {
    Reflect::get(target, &JsValue::from_str(name))
        .ok()
        .and_then(|f| f.dyn_into::<Function>().ok())
        .and_then(|f| f.call0(target).ok())
        .and_then(|v| v.as_bool())
        .unwrap_or(false)
}

#[async_trait(?Send)]
impl IdentityProvider for GoogleIdentity {
    async fn request_credential(&self, nonce: &str) -> ApiResult<Option<String>> {
        let (tx, rx) = oneshot::channel();
        let sender: CredentialSender = Rc::new(RefCell::new(Some(tx)));

        let on_credential = {
            let sender = sender.clone();
            Closure::once_into_js(move |response: JsValue| {
                let credential = Reflect::get(&response, &JsValue::from_str("credential"))
                    .ok()
                    .and_then(|v| v.as_string())
                    .filter(|c| !c.is_empty());
                settle(&sender, credential);
            })
        };

        let config = Object::new();
        let set = |key: &str, value: &JsValue| {
            Reflect::set(&config, &JsValue::from_str(key), value).map_err(|e| {
                ApiError::InvalidResponse {
                    message: format!("Failed to build Google config: {:?}", e),
                }
            })
        };
        set("client_id", &JsValue::from_str(&self.client_id))?;
        set("nonce", &JsValue::from_str(nonce))?;
        set("callback", &on_credential)?;

        gis_initialize(&config).map_err(|e| ApiError::Network {
            message: format!("Google Identity Services unavailable: {:?}", e),
        })?;

        // Moments ending without a credential resolve to None. GIS keeps
        // calling the listener after resolution, so it is owned by JS.
        let on_moment = {
            let sender = sender.clone();
            Closure::<dyn FnMut(JsValue)>::new(move |notification: JsValue| {
                if PROMPT_END_CHECKS
                    .iter()
                    .any(|check| call_bool_method(&notification, check))
                {
                    console_debug!("[GoogleIdentity] Prompt not displayed, skipped or dismissed");
                    settle(&sender, None);
                }
            })
            .into_js_value()
        };

        gis_prompt(&on_moment).map_err(|e| ApiError::Network {
            message: format!("Google prompt failed: {:?}", e),
        })?;

        let result = rx.await.map_err(|_| ApiError::MissingCredential {
            provider: "Google".to_string(),
        });

        if matches!(result, Ok(None)) {
            console_warn!("[GoogleIdentity] Prompt finished without a credential");
        }
        result
    }
}
