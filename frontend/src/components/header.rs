use leptos::*;
use mailblast_core::{Section, Session};

use crate::services::session::clear_session;
use crate::APP_NAME;

/// Sections this dashboard has pages for. The rest are listed without a link.
pub const ROUTED_SECTIONS: [Section; 1] = [Section::Campaigns];

/// Link target of a navigation entry, if the dashboard serves it.
pub fn nav_href(section: Section) -> Option<&'static str> {
    ROUTED_SECTIONS.contains(&section).then(|| section.path())
}

#[component]
pub fn Header(session: RwSignal<Option<Session>>) -> impl IntoView {
    let navigation = move || {
        session.with(|s| s.as_ref().map(Session::navigation).unwrap_or_default())
    };

    let on_logout = move |_| {
        clear_session();
        session.set(None);
    };

    view! {
        <header>
            <div class="header-left">
                <a href="/" class="logo">{APP_NAME}</a>
                <nav class="header-nav">
                    <For
                        each=navigation
                        key=|section| *section
                        children=move |section| match nav_href(section) {
                            Some(href) => {
                                view! { <a href=href class="nav-link">{section.label()}</a> }.into_view()
                            }
                            None => {
                                view! { <span class="nav-link nav-disabled">{section.label()}</span> }
                                    .into_view()
                            }
                        }
                    />
                </nav>
            </div>
            <div class="header-right">
                <Show
                    when=move || session.with(Option::is_some)
                    fallback=|| view! { <span class="user-status">"Not signed in"</span> }
                >
                    <span class="user-status">
                        {move || session.with(|s| {
                            s.as_ref()
                                .map(|s| format!("{} · {}", s.user.name, s.role.as_str()))
                                .unwrap_or_default()
                        })}
                    </span>
                    <button class="logout-button" on:click=on_logout>"Log out"</button>
                </Show>
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mailblast_core::{Role, SessionUser};

    #[test]
    fn test_only_served_sections_are_links() {
        assert_eq!(nav_href(Section::Campaigns), Some("/campaigns"));
        assert_eq!(nav_href(Section::Dashboard), None);
        assert_eq!(nav_href(Section::UserManagement), None);
        assert_eq!(nav_href(Section::SystemSettings), None);
    }

    #[test]
    fn test_admin_navigation_links() {
        let owner = Session::new(SessionUser::default(), "token");
        assert_eq!(owner.role, Role::Admin);

        let links: Vec<_> = owner.navigation().into_iter().filter_map(nav_href).collect();
        assert_eq!(links, vec!["/campaigns"]);
    }
}
