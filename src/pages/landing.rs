use yew::prelude::*;

#[function_component(Landing)]
pub fn landing() -> Html {
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

    html! {
        <div class="landing-page">
            <head>
                <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.2/css/all.min.css" crossorigin="anonymous" referrerpolicy="no-referrer" />
            </head>
            <header class="hero">
                <h1 class="hero-title">{"Aurea Studio"}</h1>
                <p class="hero-subtitle">{"Health & aesthetics, one appointment at a time."}</p>
                <p class="hero-hours">{"Tue - Sat · 9:00 - 19:00"}</p>
            </header>

            <section class="gallery-section">
                <h2>{"The Studio"}</h2>
                <div class="image-gallery">
                    <img class="gallery-image active" src="/assets/gallery/reception.jpg" alt="Reception and waiting lounge" loading="lazy" />
                    <img class="gallery-image" src="/assets/gallery/treatment-room.jpg" alt="Treatment room" loading="lazy" />
                    <img class="gallery-image" src="/assets/gallery/skincare.jpg" alt="Skincare session" loading="lazy" />
                    <img class="gallery-image" src="/assets/gallery/facade.jpg" alt="Studio entrance" loading="lazy" />
                    <button class="gallery-nav prev" aria-label="Previous photo">{"‹"}</button>
                    <button class="gallery-nav next" aria-label="Next photo">{"›"}</button>
                </div>
            </section>

            <section class="contact-section">
                <h2>{"Visit us"}</h2>
                <div class="card-list">
                    <a class="card" data-role="primary" href="https://wa.me/15555550134" target="_blank" rel="noopener noreferrer">
                        <i class="fab fa-whatsapp"></i>
                        <span>{"Book on WhatsApp"}</span>
                    </a>
                    <a class="card" data-role="secondary" href="tel:+15555550134">
                        <i class="fas fa-phone"></i>
                        <span>{"Call the studio"}</span>
                    </a>
                    <a class="card" data-role="secondary" href="https://maps.app.goo.gl/aurea-studio" target="_blank" rel="noopener noreferrer">
                        <i class="fas fa-map-marker-alt"></i>
                        <span>{"Directions"}</span>
                    </a>
                    <a class="card" data-role="secondary" href="https://instagram.com/aurea.studio" target="_blank" rel="noopener noreferrer">
                        <i class="fab fa-instagram"></i>
                        <span>{"Instagram"}</span>
                    </a>
                </div>
            </section>

            <footer class="footer">
                <p>{"Aurea Studio · 12 Linden Street"}</p>
                <p class="footer-fine">{"© 2026 Aurea Studio. All rights reserved."}</p>
            </footer>

            <style>
                {r#"
    .landing-page {
        min-height: 100vh;
        background: #151210;
        color: #f4ede2;
        font-family: system-ui, -apple-system, sans-serif;
        overflow-x: hidden;
    }
    .hero {
        padding: 6rem 2rem 4rem;
        text-align: center;
    }
    .hero-title {
        font-size: 3rem;
        font-weight: 700;
        letter-spacing: 0.2em;
        text-transform: uppercase;
        margin: 0 0 1rem;
        background: linear-gradient(45deg, #f4ede2, #d8b98a);
        -webkit-background-clip: text;
        -webkit-text-fill-color: transparent;
    }
    .hero-subtitle {
        font-size: 1.3rem;
        color: #cbbfae;
        margin: 0 0 0.5rem;
    }
    .hero-hours {
        font-size: 0.95rem;
        color: #8d8274;
        letter-spacing: 0.1em;
    }
    .gallery-section, .contact-section {
        max-width: 900px;
        margin: 0 auto;
        padding: 2rem;
    }
    .gallery-section h2, .contact-section h2 {
        font-size: 1.8rem;
        margin-bottom: 1.5rem;
        color: #d8b98a;
        text-align: center;
    }
    .image-gallery {
        position: relative;
        aspect-ratio: 3 / 2;
        border-radius: 16px;
        overflow: hidden;
        background: #201b17;
        box-shadow: 0 8px 32px rgba(0, 0, 0, 0.4);
    }
    .gallery-image {
        position: absolute;
        inset: 0;
        width: 100%;
        height: 100%;
        object-fit: cover;
        opacity: 0;
        transition: opacity 0.6s ease;
    }
    .gallery-image.active {
        opacity: 1;
    }
    .gallery-nav {
        position: absolute;
        top: 50%;
        transform: translateY(-50%);
        width: 44px;
        height: 44px;
        border: none;
        border-radius: 50%;
        background: rgba(21, 18, 16, 0.6);
        color: #f4ede2;
        font-size: 1.6rem;
        line-height: 1;
        cursor: pointer;
        transition: background 0.3s ease;
    }
    .gallery-nav:hover {
        background: rgba(216, 185, 138, 0.5);
    }
    .gallery-nav.prev { left: 1rem; }
    .gallery-nav.next { right: 1rem; }
    .card-list {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
        gap: 1rem;
    }
    .card {
        display: flex;
        align-items: center;
        justify-content: center;
        gap: 0.75rem;
        padding: 1.25rem 1.5rem;
        border-radius: 12px;
        background: #201b17;
        border: 1px solid rgba(216, 185, 138, 0.2);
        color: #f4ede2;
        text-decoration: none;
        font-size: 1.05rem;
        transition: transform 0.2s ease, box-shadow 0.2s ease;
    }
    .card[data-role="primary"] {
        background: linear-gradient(45deg, #25d366, #128c7e);
        border: none;
        font-weight: 600;
    }
    .card i {
        font-size: 1.3rem;
    }
    .footer {
        padding: 3rem 2rem 2rem;
        text-align: center;
        color: #8d8274;
        border-top: 1px solid rgba(216, 185, 138, 0.15);
    }
    .footer-fine {
        font-size: 0.8rem;
        margin-top: 0.5rem;
    }
    @media (max-width: 768px) {
        .hero {
            padding: 4rem 1rem 2.5rem;
        }
        .hero-title {
            font-size: 2rem;
        }
        .hero-subtitle {
            font-size: 1.1rem;
        }
        .gallery-section, .contact-section {
            padding: 1rem;
        }
        .gallery-nav {
            width: 38px;
            height: 38px;
        }
    }
                "#}
            </style>
        </div>
    }
}
