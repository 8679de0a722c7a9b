use chrono::{Datelike, Local};
use log::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::components::notification::{ToastAction, ToastQueue, Toaster};
use crate::lead::controller::Notice;
use crate::pages::contact::ContactSection;
use crate::pages::features::Features;
use crate::pages::hero::Hero;

/// Elements reveal once their top is this far inside the viewport.
const REVEAL_MARGIN_PX: f64 = 100.0;

/// Looping motion for the hero badge and floating card icons.
const HERO_MOTION_CSS: &str = r#"
    @keyframes badgePulse {
        0%, 100% { box-shadow: 0 0 0 0 rgba(201, 162, 39, 0.35); }
        50% { box-shadow: 0 0 0 8px rgba(201, 162, 39, 0); }
    }
    .badge-pulse { animation: badgePulse 2.4s ease-in-out infinite; }
    @keyframes spin {
        from { transform: rotate(0deg); }
        to { transform: rotate(360deg); }
    }
    .spin { display: inline-block; animation: spin 8s linear infinite; }
    @keyframes pulse {
        0%, 100% { transform: scale(1); }
        50% { transform: scale(1.2); }
    }
    .pulse { display: inline-block; animation: pulse 2s ease-in-out infinite; }
"#;

pub fn should_reveal(element_top: f64, viewport_height: f64, margin: f64) -> bool {
    element_top < viewport_height - margin
}

fn reveal_visible_elements(document: &web_sys::Document, viewport_height: f64) {
    let Ok(elements) = document.query_selector_all(".reveal:not(.visible)") else {
        return;
    };
    for i in 0..elements.length() {
        let Some(element) = elements.item(i).and_then(|n| n.dyn_into::<web_sys::Element>().ok()) else {
            continue;
        };
        if should_reveal(element.get_bounding_client_rect().top(), viewport_height, REVEAL_MARGIN_PX) {
            if let Err(e) = element.class_list().add_1("visible") {
                warn!("Failed to reveal element: {:?}", e);
            }
        }
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let toasts = use_reducer(ToastQueue::default);

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    use_effect_with_deps(|_| {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();
        let window_clone = window.clone();

        let scroll_callback = Closure::wrap(Box::new(move || {
            let viewport_height = window_clone
                .inner_height()
                .ok()
                .and_then(|h| h.as_f64())
                .unwrap_or(0.0);
            reveal_visible_elements(&document, viewport_height);
        }) as Box<dyn FnMut()>);

        window.add_event_listener_with_callback(
            "scroll",
            scroll_callback.as_ref().unchecked_ref(),
        ).unwrap();

        // Initial check for content already in view
        scroll_callback.as_ref().unchecked_ref::<web_sys::js_sys::Function>().call0(&JsValue::NULL).unwrap();

        move || {
            window.remove_event_listener_with_callback(
                "scroll",
                scroll_callback.as_ref().unchecked_ref(),
            ).unwrap();
        }
    }, ());

    let on_notice = {
        let toasts = toasts.clone();
        Callback::from(move |notice: Notice| toasts.dispatch(ToastAction::Push(notice)))
    };
    let on_dismiss = {
        let toasts = toasts.clone();
        Callback::from(move |id: u32| toasts.dispatch(ToastAction::Dismiss(id)))
    };

    html! {
        <div class="landing-page">
            <style>
                {r#"
                    :root {
                        --gold-primary: #C9A227;
                        --gold-metallic: linear-gradient(135deg, #BF953F 0%, #FCF6BA 45%, #B38728 70%, #FBF5B7 100%);
                        --text-primary: #1A1A1A;
                        --text-secondary: #4A4A4A;
                        --text-muted: #8A8A8A;
                        --bg-secondary: #F7F5EF;
                        --bg-overlay: rgba(201, 162, 39, 0.08);
                        --border-gold: rgba(201, 162, 39, 0.3);
                        --border-light: #E5E5E5;
                    }
                    .luxury-container {
                        max-width: 1280px;
                        margin: 0 auto;
                        padding: 0 24px;
                    }
                    .section-padding {
                        padding: 120px 0;
                    }
                    .two-column {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 80px;
                        align-items: center;
                    }
                    .badge {
                        display: inline-block;
                        padding: 8px 16px;
                        background: var(--bg-overlay);
                        border: 1px solid var(--border-gold);
                        border-radius: 24px;
                        margin-bottom: 16px;
                        font-size: 14px;
                        color: var(--gold-primary);
                        font-weight: 600;
                    }
                    .gold-text {
                        background: var(--gold-metallic);
                        -webkit-background-clip: text;
                        -webkit-text-fill-color: transparent;
                        background-clip: text;
                    }
                    @keyframes gradientShift {
                        0% { background-position: 0% 50%; }
                        50% { background-position: 100% 50%; }
                        100% { background-position: 0% 50%; }
                    }
                    .gradient-animation {
                        background-size: 200% 200%;
                        animation: gradientShift 4s ease infinite;
                    }
                    .hero {
                        position: relative;
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        overflow: hidden;
                        background: linear-gradient(180deg, #FFFFFF 0%, #FAFAFA 100%);
                    }
                    .hero-glow {
                        position: absolute;
                        border-radius: 50%;
                        filter: blur(70px);
                        background: var(--bg-overlay);
                        animation: breathe 9s ease-in-out infinite;
                    }
                    .hero-glow-left { width: 480px; height: 480px; top: -120px; left: -160px; }
                    .hero-glow-right { width: 560px; height: 560px; bottom: -200px; right: -180px; }
                    @keyframes breathe {
                        0%, 100% { transform: scale(1); }
                        50% { transform: scale(1.12); }
                    }
                    .hero-title {
                        font-size: 64px;
                        font-weight: 700;
                        line-height: 1.1;
                        color: var(--text-primary);
                        margin-bottom: 24px;
                    }
                    .hero-description, .section-subtitle {
                        font-size: 18px;
                        color: var(--text-secondary);
                        line-height: 1.6;
                        max-width: 560px;
                        margin-bottom: 40px;
                    }
                    .hero-cta-group { display: flex; gap: 16px; flex-wrap: wrap; }
                    .btn-gold-primary, .btn-gold-secondary {
                        padding: 16px 32px;
                        border-radius: 8px;
                        font-size: 16px;
                        font-weight: 600;
                        cursor: pointer;
                        transition: transform 0.2s ease, box-shadow 0.2s ease;
                    }
                    .btn-gold-primary {
                        background: var(--gold-metallic);
                        border: none;
                        color: var(--text-primary);
                    }
                    .btn-gold-secondary {
                        background: transparent;
                        border: 1px solid var(--border-gold);
                        color: var(--gold-primary);
                    }
                    .btn-gold-primary:hover, .btn-gold-secondary:hover {
                        transform: translateY(-2px);
                        box-shadow: 0 8px 24px rgba(201, 162, 39, 0.25);
                    }
                    .btn-gold-primary:disabled {
                        opacity: 0.7;
                        cursor: not-allowed;
                        transform: none;
                    }
                    .hero-stats { display: flex; gap: 40px; margin-top: 60px; }
                    .stat { transition: transform 0.2s ease; }
                    .stat:hover { transform: scale(1.1); }
                    .stat-value { font-size: 36px; font-weight: 700; color: var(--gold-primary); margin-bottom: 8px; }
                    .stat-label { font-size: 14px; color: var(--text-muted); }
                    .hero-visual { position: relative; }
                    .perspective-image img { width: 100%; border-radius: 16px; display: block; }
                    .perspective-image { transition: transform 0.4s ease; }
                    .perspective-image:hover { transform: perspective(1000px) rotateY(-2deg) rotateX(1deg) scale(1.02); }
                    @keyframes float {
                        0%, 100% { transform: translateY(0); }
                        50% { transform: translateY(-20px); }
                    }
                    .floating { animation: float 6s ease-in-out infinite; }
                    .glass-card {
                        background: rgba(255, 255, 255, 0.8);
                        backdrop-filter: blur(12px);
                        border: 1px solid var(--border-gold);
                        border-radius: 16px;
                        box-shadow: 0 8px 32px rgba(0, 0, 0, 0.06);
                    }
                    .floating-card {
                        position: absolute;
                        padding: 20px;
                        animation: float 6s ease-in-out infinite;
                    }
                    .floating-card-top { top: 10%; left: -40px; }
                    .floating-card-bottom { bottom: 10%; right: -30px; animation-delay: 0.5s; }
                    .floating-card-head { display: flex; align-items: center; gap: 12px; margin-bottom: 8px; }
                    .floating-card-figure { font-size: 24px; font-weight: 700; color: var(--gold-primary); }
                    .floating-card-title { font-size: 16px; font-weight: 700; color: var(--text-primary); }
                    .floating-card p { font-size: 14px; color: var(--text-secondary); margin: 0; }
                    .features-section { background: var(--bg-secondary); }
                    .section-header { text-align: center; margin-bottom: 80px; }
                    .section-header .section-subtitle { margin: 0 auto; }
                    .section-title { font-size: 48px; font-weight: 700; color: var(--text-primary); margin-bottom: 20px; }
                    .features-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(340px, 1fr));
                        gap: 32px;
                    }
                    .feature-card { padding: 0 0 32px; overflow: hidden; }
                    .feature-image { height: 200px; overflow: hidden; }
                    .feature-image img { width: 100%; height: 100%; object-fit: cover; transition: transform 0.6s ease; }
                    .feature-card:hover .feature-image img { transform: scale(1.15) rotate(2deg); }
                    .feature-icon { font-size: 32px; margin: 24px 32px 16px; }
                    .feature-title { font-size: 22px; font-weight: 700; color: var(--text-primary); margin: 0 32px 12px; }
                    .feature-description { font-size: 15px; color: var(--text-secondary); line-height: 1.6; margin: 0 32px; }
                    .reveal {
                        opacity: 0;
                        transform: translateY(40px) scale(0.96);
                        transition-property: opacity, transform;
                        transition-duration: 0.6s;
                        transition-timing-function: ease-out;
                    }
                    .reveal.visible { opacity: 1; transform: none; }
                    .contact-section { background: linear-gradient(180deg, #FAFAFA 0%, #FFFFFF 100%); }
                    .contact-cards { display: flex; flex-direction: column; gap: 24px; }
                    .contact-card { padding: 24px; display: flex; align-items: center; gap: 16px; }
                    .contact-icon {
                        width: 56px;
                        height: 56px;
                        border-radius: 12px;
                        background: var(--bg-overlay);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 24px;
                    }
                    .contact-label { font-size: 14px; color: var(--text-muted); margin-bottom: 4px; }
                    .contact-name { font-size: 18px; font-weight: 600; color: var(--text-primary); }
                    .contact-phone { font-size: 16px; color: var(--text-primary); margin-top: 4px; }
                    .contact-image { margin-top: 40px; }
                    .contact-form { padding: 48px; display: flex; flex-direction: column; gap: 24px; }
                    .contact-form label {
                        display: flex;
                        flex-direction: column;
                        gap: 8px;
                        font-size: 14px;
                        font-weight: 600;
                        color: var(--text-primary);
                    }
                    .contact-form input, .contact-form textarea {
                        width: 100%;
                        padding: 14px 16px;
                        border: 1px solid var(--border-light);
                        border-radius: 8px;
                        font-size: 16px;
                        background: white;
                        transition: border-color 0.3s ease;
                        box-sizing: border-box;
                    }
                    .contact-form textarea { resize: vertical; }
                    .contact-form input:focus, .contact-form textarea:focus {
                        outline: none;
                        border-color: var(--gold-primary);
                    }
                    .submit-button { width: 100%; }
                    .landing-footer {
                        text-align: center;
                        padding: 32px 0;
                        font-size: 14px;
                        color: var(--text-muted);
                        border-top: 1px solid var(--border-light);
                    }
                    @media (max-width: 1024px) {
                        .two-column {
                            grid-template-columns: 1fr;
                            gap: 40px;
                        }
                        .hero-title { font-size: 44px; }
                        .section-title { font-size: 36px; }
                        .contact-form { padding: 32px; }
                        .floating-card { display: none; }
                    }
                "#}
            </style>
            <style>{HERO_MOTION_CSS}</style>
            <Hero />
            <Features />
            <ContactSection {on_notice} />
            <footer class="landing-footer">
                {format!("© {} Tüm hakları saklıdır.", Local::now().year())}
            </footer>
            <Toaster queue={(*toasts).clone()} {on_dismiss} />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_once_inside_margin() {
        assert!(should_reveal(500.0, 800.0, REVEAL_MARGIN_PX));
        assert!(!should_reveal(750.0, 800.0, REVEAL_MARGIN_PX));
        assert!(!should_reveal(700.0, 800.0, REVEAL_MARGIN_PX));
    }

    #[test]
    fn hero_motion_classes_have_rules() {
        for class in [".badge-pulse", ".spin", ".pulse"] {
            assert!(
                HERO_MOTION_CSS.contains(&format!("{} {{", class)),
                "no rule for {}",
                class
            );
        }
    }

    #[test]
    fn above_viewport_counts_as_revealed() {
        assert!(should_reveal(-300.0, 800.0, REVEAL_MARGIN_PX));
    }
}
