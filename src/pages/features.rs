use yew::prelude::*;

const STAGGER_SECONDS: f64 = 0.15;

pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
}

pub const FEATURES: [Feature; 6] = [
    Feature {
        icon: "📡",
        title: "RFID Teknolojisi",
        description: "Akıllı RFID takip sistemi ile altın ürünlerinizi anında tanımlayın, stok kontrolünü otomatikleştirin ve insan hatasını minimize edin.",
        image: "/assets/masterpieces/zebra_terminal.png",
    },
    Feature {
        icon: "📄",
        title: "Finansal Kontrol",
        description: "Gerçek zamanlı defter kayıtları, günlük raporlar ve detaylı finansal analiz araçları ile işletmenizin tam kontrolünü elinize alın.",
        image: "https://images.pexels.com/photos/6214476/pexels-photo-6214476.jpeg",
    },
    Feature {
        icon: "🛡",
        title: "Güvenlik Sistemi",
        description: "Güvenli kullanıcı oturumları, şifreli işlem geçmişi ve çok katmanlı güvenlik protokolleri ile verilerinizi koruyun.",
        image: "https://images.unsplash.com/photo-1659200501439-f090553a4fc2",
    },
    Feature {
        icon: "📊",
        title: "Borsa Analizi",
        description: "Canlı borsa verileri, trend analizleri ve otomatik fiyat güncellemeleri ile piyasanın nabzını tutun.",
        image: "https://images.unsplash.com/photo-1614562183717-a01aa7a16723",
    },
    Feature {
        icon: "⏱",
        title: "Gerçek Zamanlı Takip",
        description: "Anlık stok durumu, hareketler ve işlemleri 7/24 takip edin. Her an her yerden erişim imkanı.",
        image: "https://images.unsplash.com/photo-1628903920207-836a62ac9f6a",
    },
    Feature {
        icon: "🔒",
        title: "Veri Güvenliği",
        description: "Bankacılık standartlarında şifreleme, yedekleme sistemleri ve güvenli bulut altyapısı.",
        image: "https://images.pexels.com/photos/7723554/pexels-photo-7723554.jpeg",
    },
];

fn stagger_style(index: usize) -> String {
    format!("transition-delay: {:.2}s;", index as f64 * STAGGER_SECONDS)
}

#[function_component(Features)]
pub fn features() -> Html {
    html! {
        <section id="features" class="section-padding features-section">
            <div class="luxury-container">
                <div class="section-header reveal">
                    <div class="badge">
                        <span>{"ÖZELLİKLER"}</span>
                    </div>
                    <h2 class="section-title">
                        {"Profesyonel Araçlar,"}
                        <br />
                        <span class="gold-text gradient-animation">{"Üstün Performans"}</span>
                    </h2>
                    <p class="section-subtitle">
                        {"Altın ticaretinizi bir üst seviyeye taşıyan teknolojiler"}
                    </p>
                </div>
                <div class="features-grid">
                    { for FEATURES.iter().enumerate().map(|(index, feature)| html! {
                        <div class="feature-card glass-card reveal" style={stagger_style(index)}>
                            <div class="feature-image">
                                <img src={feature.image} alt={feature.title} loading="lazy" />
                            </div>
                            <div class="feature-icon">{feature.icon}</div>
                            <h3 class="feature-title">{feature.title}</h3>
                            <p class="feature-description">{feature.description}</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cards_enter_in_order() {
        assert_eq!(stagger_style(0), "transition-delay: 0.00s;");
        assert_eq!(stagger_style(3), "transition-delay: 0.45s;");
    }
}
