use yew::prelude::*;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use crate::components::animated_counter::AnimatedCounter;

/// Smooth-scrolls to the element with the given id, if it exists.
pub fn scroll_to_section(id: &str) {
    let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        return;
    };
    let mut options = ScrollIntoViewOptions::new();
    options.behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let to_contact = Callback::from(|_: MouseEvent| scroll_to_section("contact"));
    let to_features = Callback::from(|_: MouseEvent| scroll_to_section("features"));

    html! {
        <section class="hero">
            <div class="hero-glow hero-glow-left"></div>
            <div class="hero-glow hero-glow-right"></div>
            <div class="luxury-container">
                <div class="two-column">
                    <div class="hero-content">
                        <div class="badge badge-pulse">
                            <span>{"⚡ Profesyonel Altın - Döviz Ticaret Sistemi"}</span>
                        </div>
                        <h1 class="hero-title">
                            {"Altın- Döviz Ticaretinizde"}
                            <br />
                            <span class="gold-text gradient-animation">{"Yeni Dönem"}</span>
                        </h1>
                        <p class="hero-description">
                            {"RFID teknolojisi, gerçek zamanlı borsa analizi ve güvenli finansal yönetimle altın ticaretinizi profesyonel seviyeye taşıyın."}
                        </p>
                        <div class="hero-cta-group">
                            <button class="btn-gold-primary" onclick={to_contact}>
                                {"Profesyonel Erişim →"}
                            </button>
                            <button class="btn-gold-secondary" onclick={to_features}>
                                {"Özellikleri İncele"}
                            </button>
                        </div>
                        <div class="hero-stats">
                            <div class="stat">
                                <div class="stat-value">
                                    <AnimatedCounter end={99.9} duration_ms={2500} suffix="%" />
                                </div>
                                <div class="stat-label">{"Doğruluk Oranı"}</div>
                            </div>
                            <div class="stat">
                                <div class="stat-value">{"24/7"}</div>
                                <div class="stat-label">{"Teknik Destek"}</div>
                            </div>
                            <div class="stat">
                                <div class="stat-value">
                                    <AnimatedCounter end={100.0} duration_ms={2000} suffix="%" />
                                </div>
                                <div class="stat-label">{"Güvenli"}</div>
                            </div>
                        </div>
                    </div>
                    <div class="hero-visual">
                        <div class="perspective-image floating">
                            <img src="/assets/masterpieces/hero_dashboard.png" alt="Gold Trading Dashboard" loading="eager" />
                        </div>
                        <div class="glass-card floating-card floating-card-top">
                            <div class="floating-card-head">
                                <span class="spin">{"📈"}</span>
                                <span class="floating-card-figure">{"+45%"}</span>
                            </div>
                            <p>{"Verimlilik Artışı"}</p>
                        </div>
                        <div class="glass-card floating-card floating-card-bottom">
                            <div class="floating-card-head">
                                <span class="pulse">{"🛡"}</span>
                                <span class="floating-card-title">{"Güvenli"}</span>
                            </div>
                            <p>{"256-bit Şifreleme"}</p>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
