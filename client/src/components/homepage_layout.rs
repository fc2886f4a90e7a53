//! Layout for public pages: top navigation, page body, footer.

use leptos::prelude::*;

use crate::components::footer::Footer;
use crate::components::main_nav::MainNav;

#[component]
pub fn HomepageLayout(children: Children) -> impl IntoView {
    view! {
        <div class="homepage-layout">
            <MainNav/>
            <main class="homepage-layout__main">{children()}</main>
            <Footer/>
        </div>
    }
}
