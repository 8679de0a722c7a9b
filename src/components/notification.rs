use yew::prelude::*;
use gloo_timers::callback::Timeout;

use crate::lead::controller::{Notice, Severity};

const TOAST_LIFETIME_MS: u32 = 4000;

/// Toasts on screen, oldest first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastQueue {
    next_id: u32,
    toasts: Vec<(u32, Notice)>,
}

impl ToastQueue {
    pub fn push(&mut self, notice: Notice) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.toasts.push((id, notice));
        id
    }

    pub fn dismiss(&mut self, id: u32) {
        self.toasts.retain(|(toast_id, _)| *toast_id != id);
    }

    pub fn iter(&self) -> impl Iterator<Item = &(u32, Notice)> {
        self.toasts.iter()
    }
}

pub enum ToastAction {
    Push(Notice),
    Dismiss(u32),
}

impl Reducible for ToastQueue {
    type Action = ToastAction;

    fn reduce(self: std::rc::Rc<Self>, action: Self::Action) -> std::rc::Rc<Self> {
        let mut queue = (*self).clone();
        match action {
            ToastAction::Push(notice) => {
                queue.push(notice);
            }
            ToastAction::Dismiss(id) => queue.dismiss(id),
        }
        queue.into()
    }
}

#[derive(Properties, PartialEq)]
pub struct ToasterProps {
    pub queue: ToastQueue,
    pub on_dismiss: Callback<u32>,
}

#[function_component(Toaster)]
pub fn toaster(props: &ToasterProps) -> Html {
    html! {
        <div class="toaster">
            <style>
                {r#"
                    .toaster {
                        position: fixed;
                        bottom: 24px;
                        right: 24px;
                        display: flex;
                        flex-direction: column;
                        gap: 12px;
                        z-index: 1000;
                    }
                    @keyframes toastIn {
                        from { transform: translateY(20px); opacity: 0; }
                        to { transform: translateY(0); opacity: 1; }
                    }
                    .toast {
                        width: 340px;
                        background: #fff;
                        border-radius: 12px;
                        padding: 16px 20px;
                        box-shadow: 0 12px 32px rgba(0, 0, 0, 0.12);
                        border-left: 4px solid var(--gold-primary);
                        animation: toastIn 0.3s ease-out forwards;
                        cursor: pointer;
                    }
                    .toast.error {
                        border-left-color: #d9534f;
                    }
                    .toast-headline {
                        font-weight: 600;
                        font-size: 15px;
                        color: var(--text-primary);
                    }
                    .toast-description {
                        font-size: 14px;
                        color: var(--text-secondary);
                        margin-top: 4px;
                    }
                "#}
            </style>
            { for props.queue.iter().map(|(id, notice)| html! {
                <Toast key={*id} id={*id} notice={notice.clone()} on_dismiss={props.on_dismiss.clone()} />
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ToastProps {
    id: u32,
    notice: Notice,
    on_dismiss: Callback<u32>,
}

#[function_component(Toast)]
fn toast(props: &ToastProps) -> Html {
    {
        let id = props.id;
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(move |_| {
            let timeout = Timeout::new(TOAST_LIFETIME_MS, move || on_dismiss.emit(id));
            move || drop(timeout) // Cancelled if dismissed by click first
        }, props.id);
    }

    let onclick = {
        let id = props.id;
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(id))
    };

    let class = match props.notice.severity {
        Severity::Success => "toast success",
        Severity::Error => "toast error",
    };

    html! {
        <div class={class} role="status" {onclick}>
            <div class="toast-headline">{&props.notice.headline}</div>
            <div class="toast-description">{&props.notice.description}</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn push_assigns_increasing_ids() {
        let mut queue = ToastQueue::default();
        assert_eq!(queue.push(Notice::sent()), 0);
        assert_eq!(queue.push(Notice::failed()), 1);
        assert_eq!(queue.iter().count(), 2);
    }

    #[test]
    fn dismiss_removes_only_that_toast() {
        let mut queue = ToastQueue::default();
        let first = queue.push(Notice::failed());
        queue.push(Notice::sent());

        queue.dismiss(first);

        let left: Vec<_> = queue.iter().map(|(_, n)| n.clone()).collect();
        assert_eq!(left, vec![Notice::sent()]);
    }

    #[test]
    fn reducer_applies_actions() {
        let queue = Rc::new(ToastQueue::default());
        let queue = queue.reduce(ToastAction::Push(Notice::sent()));
        assert_eq!(queue.iter().count(), 1);
        let queue = queue.reduce(ToastAction::Dismiss(0));
        assert_eq!(queue.iter().count(), 0);
    }
}
