use crate::domain::a001_pg_listing::ui::list::PgListingPage;
use crate::layout::top_header::TopHeader;
use contracts::shared::config::load_config;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    match load_config(None) {
        Ok(config) => {
            let title = config.app.title.clone();
            // Конфигурация каталога доступна всем компонентам через context
            provide_context(config);

            view! {
                <div class="app">
                    <TopHeader title=title />
                    <main class="app__main">
                        <PgListingPage />
                    </main>
                </div>
            }
            .into_any()
        }
        Err(e) => {
            log::error!("Catalog config failed to load: {}", e);
            view! {
                <div class="app app--error">
                    <p class="error-banner">{format!("Configuration error: {}", e)}</p>
                </div>
            }
            .into_any()
        }
    }
}
