mod contact;
mod footer;
mod header;
mod hero;
mod navigation;
mod projects;
mod section;
mod skills;
mod toast;

use leptos::prelude::*;
use leptos::server_fn::codec::GetUrl;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::portfolio::{static_portfolio, HeaderIdentity, PortfolioData};
use crate::ui::scroll::NAV_LINKS;
use crate::ui::toast::{Toast, TOAST_DURATION};

use contact::ContactSection;
use footer::Footer;
use header::Header;
use hero::Hero;
use navigation::scroll_to_section;
use projects::ProjectsSection;
use skills::SkillsSection;
use toast::SuccessToast;

/// Served from `public/`.
const FAVICON: &str = "/favicon.svg";

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="light dark" />
                <link rel="icon" type="image/svg+xml" href=FAVICON />
                <link
                    rel="stylesheet"
                    href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("{title} | Portfolio") />
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}

/// Loads the portfolio from the configured remote endpoint, falling back to the
/// bundled data when the endpoint is unset or unreachable.
#[server(input = GetUrl)]
pub async fn load_portfolio() -> Result<PortfolioData, ServerFnError> {
    use crate::api::{fetch_portfolio, ApiConfig, ApiError, API_URL_VAR};

    match fetch_portfolio(&ApiConfig::from_env()).await {
        Ok(data) => Ok(data),
        Err(ApiError::Configuration) => {
            tracing::debug!("{API_URL_VAR} unset, serving bundled portfolio");
            Ok(static_portfolio().clone())
        }
        Err(e) => {
            tracing::warn!("remote portfolio unavailable, serving bundled portfolio: {e}");
            Ok(static_portfolio().clone())
        }
    }
}

#[component]
fn HomePage() -> impl IntoView {
    let portfolio = Resource::new(
        || (),
        |_| async move {
            load_portfolio().await.unwrap_or_else(|e| {
                log::warn!("couldn't load portfolio: {e}");
                static_portfolio().clone()
            })
        },
    );

    view! {
        <Title text="Home" />
        <Suspense fallback=move || {
            view! {
                <div class="min-h-screen flex items-center justify-center">
                    <span class="loading"></span>
                </div>
            }
        }>
            {move || Suspend::new(async move {
                let data = portfolio.await;
                view! { <PortfolioPage data /> }
            })}
        </Suspense>
    }
}

/// Composes the sections and owns the success toast.
#[component]
fn PortfolioPage(data: PortfolioData) -> impl IntoView {
    let toast = RwSignal::new(Toast::default());

    let show_toast = Callback::new(move |message: String| {
        let ticket = toast.write().show(message);
        set_timeout(
            move || {
                toast.write().expire(ticket);
            },
            TOAST_DURATION,
        );
    });

    let on_contact = Callback::new(|_: ()| scroll_to_section("contact"));
    let on_download_cv = Callback::new(move |_: ()| {
        show_toast.run("CV download started!".to_string());
    });

    let identity = HeaderIdentity::from_portfolio(&data);
    let PortfolioData {
        profile,
        skills,
        projects,
        contact,
    } = data;
    let name = profile.name.clone();
    let tagline = format!(
        "{} • Building the future, one line of code at a time",
        profile.title
    );

    view! {
        <div class="bg-white dark:bg-gray-900 text-gray-900 dark:text-gray-100 min-h-screen flex flex-col">
            <Header identity nav_links=&NAV_LINKS />
            <main class="flex-1 flex flex-col gap-0">
                <Hero profile on_contact on_download_cv />
                <SkillsSection skills />
                <ProjectsSection projects />
                <ContactSection contact on_success=show_toast />
            </main>
            <Footer name tagline />
            <SuccessToast
                message=Signal::derive(move || toast.with(|t| t.message().to_string()))
                show=Signal::derive(move || toast.with(Toast::is_visible))
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_favicon_is_served() {
        let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("public")
            .join(FAVICON.trim_start_matches('/'));
        assert!(path.is_file(), "{} missing", path.display());
    }
}
