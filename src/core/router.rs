use crate::domain::view::Control;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Area {
    Products,
    Cart,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Enter,
    Other(String),
}

/// Raw interaction events, as delivered by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    Click { area: Area, target: Control },
    ClearRequested,
    SearchInput(String),
    SearchKey(Key),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    AddToCart(String),
    RemoveFromCart(String),
    ChangeQty(String, i64),
    ClearCart,
    Search(String),
    FocusFirstAdd,
}

/// Map an event to the action it asks for.
///
/// Clicks are resolved from the target itself (classes, label and carried
/// id), so freshly rendered controls need no registration.
pub fn route(event: UiEvent) -> Option<Action> {
    match event {
        UiEvent::Click {
            area: Area::Products,
            target,
        } => {
            if !target.has_class("add-btn") {
                return None;
            }
            target.product_id.map(Action::AddToCart)
        }
        UiEvent::Click {
            area: Area::Cart,
            target,
        } => {
            let id = target.product_id.clone()?;
            if target.has_class("remove") {
                Some(Action::RemoveFromCart(id))
            } else if target.has_class("dec") {
                Some(Action::ChangeQty(id, -1))
            } else if target.has_class("btn") && target.label.trim() == "+" {
                // 增加按鈕沒有專屬 class，只能看顯示文字
                Some(Action::ChangeQty(id, 1))
            } else {
                None
            }
        }
        UiEvent::ClearRequested => Some(Action::ClearCart),
        UiEvent::SearchInput(raw) => Some(Action::Search(raw.trim().to_string())),
        UiEvent::SearchKey(Key::Enter) => Some(Action::FocusFirstAdd),
        UiEvent::SearchKey(Key::Other(_)) => None,
    }
}
