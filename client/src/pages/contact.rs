//! Static contact page.

use leptos::prelude::*;

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <main class="contact-page">
            <div class="container">
                <section class="contact-header">
                    <h1>"Contact Us"</h1>
                    <p>"Questions about an order or a part? Get in touch."</p>
                </section>
                <div class="contact-details">
                    <p>"Email: " <a href="mailto:support@pcpartsshop.example">"support@pcpartsshop.example"</a></p>
                    <p>"Phone: +1 (555) 010-4242"</p>
                    <p>"Hours: Mon-Fri, 9:00-17:00"</p>
                </div>
            </div>
        </main>
    }
}
