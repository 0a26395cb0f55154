use std::any::Any;

use leptos::logging::error;
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use serde_json::Value;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use crate::core::CardTheme;
use crate::core::models::TaskSummary;
use crate::features::task_card::TaskCard;

/// Everything needed to mount one card, resolved from loosely typed host input.
#[derive(Debug, Clone, PartialEq)]
pub struct MountRequest {
    pub summary: TaskSummary,
    pub active: bool,
    pub theme: CardTheme,
}

// null means "use the default"; anything else must deserialize.
fn from_optional<T: DeserializeOwned>(value: Value, what: &str) -> Result<Option<T>, String> {
    if value.is_null() {
        return Ok(None);
    }
    serde_json::from_value(value)
        .map(Some)
        .map_err(|e| format!("Failed to read {}: {}", what, e))
}

impl MountRequest {
    /// `active` that is not a boolean counts as `false`. A null summary or
    /// theme falls back to the placeholder or default theme.
    pub fn resolve(summary: Value, active: Value, theme: Value) -> Result<Self, String> {
        let summary = from_optional::<TaskSummary>(summary, "task summary")?
            .unwrap_or_else(TaskSummary::placeholder);
        let theme = from_optional::<CardTheme>(theme, "card theme")?.unwrap_or_default();
        theme.validate()?;

        Ok(Self {
            summary,
            active: active.as_bool().unwrap_or(false),
            theme,
        })
    }
}

// undefined and null both become Value::Null.
fn to_json(value: JsValue, what: &str) -> Result<Value, String> {
    if value.is_undefined() || value.is_null() {
        return Ok(Value::Null);
    }
    serde_wasm_bindgen::from_value(value).map_err(|e| format!("Failed to read {}: {}", what, e))
}

/// A mounted card. Dropping or unmounting it removes the card from the page.
#[wasm_bindgen]
pub struct TaskCardHandle {
    mounted: Option<Box<dyn Any>>,
}

#[wasm_bindgen]
impl TaskCardHandle {
    pub fn unmount(&mut self) {
        self.mounted.take();
    }

    #[wasm_bindgen(getter)]
    pub fn mounted(&self) -> bool {
        self.mounted.is_some()
    }
}

fn find_target(target_id: &str) -> Result<web_sys::HtmlElement, String> {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(target_id))
        .ok_or_else(|| format!("No element with id '{}'", target_id))?
        .dyn_into::<web_sys::HtmlElement>()
        .map_err(|_| format!("Element '{}' is not an HTML element", target_id))
}

fn mount(target_id: &str, summary: JsValue, active: JsValue, theme: JsValue) -> Result<TaskCardHandle, String> {
    let request = MountRequest::resolve(
        to_json(summary, "task summary")?,
        active.as_bool().map(Value::Bool).unwrap_or(Value::Null),
        to_json(theme, "card theme")?,
    )?;
    let target = find_target(target_id)?;

    // Remounting replaces whatever the target held, including an earlier card.
    target.set_inner_html("");

    let MountRequest { summary, active, theme } = request;
    let handle = leptos::mount::mount_to(target, move || {
        provide_context(theme);
        view! { <TaskCard summary=summary active=active /> }
    });

    Ok(TaskCardHandle { mounted: Some(Box::new(handle)) })
}

/// Mounts a card into the element with `target_id`, replacing its contents.
/// Keep the returned handle to unmount the card later.
#[wasm_bindgen]
pub fn mount_task_card(target_id: &str, summary: JsValue, active: JsValue, theme: JsValue) -> Result<TaskCardHandle, JsValue> {
    mount(target_id, summary, active, theme).map_err(|e| {
        error!("mount_task_card: {}", e);
        JsValue::from_str(&e)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn non_boolean_active_is_inactive() {
        for active in [Value::Null, json!("true"), json!(1), json!({})] {
            let request = MountRequest::resolve(Value::Null, active, Value::Null).unwrap();
            assert!(!request.active);
        }
        assert!(MountRequest::resolve(Value::Null, json!(true), Value::Null).unwrap().active);
    }

    #[test]
    fn null_summary_and_theme_use_defaults() {
        let request = MountRequest::resolve(Value::Null, json!(false), Value::Null).unwrap();
        assert_eq!(request.summary, TaskSummary::placeholder());
        assert_eq!(request.theme, CardTheme::default());
    }

    #[test]
    fn supplied_summary_is_used() {
        let summary = json!({"title": "Deploy", "dueDate": "2025-01-09", "description": "Ship it."});
        let request = MountRequest::resolve(summary, json!(true), Value::Null).unwrap();
        assert_eq!(request.summary.title, "Deploy");
        assert_eq!(request.summary.due_label(), "9 Jan");
    }

    #[test]
    fn malformed_summary_is_rejected() {
        let err = MountRequest::resolve(json!({"title": 5}), Value::Null, Value::Null).unwrap_err();
        assert!(err.starts_with("Failed to read task summary"));
        assert!(MountRequest::resolve(json!("Task 1"), Value::Null, Value::Null).is_err());
    }

    #[test]
    fn malformed_theme_is_rejected() {
        let err = MountRequest::resolve(Value::Null, Value::Null, json!({"spacingPx": "wide"})).unwrap_err();
        assert!(err.starts_with("Failed to read card theme"));

        let err = MountRequest::resolve(Value::Null, Value::Null, json!({"borderColor": "red; display: none"}))
            .unwrap_err();
        assert!(err.contains("borderColor"));
    }
}
