use dioxus::prelude::*;

use common::search_query::SearchQuery;

use crate::components::navbar::Navbar;
use crate::data_definitions::url_param::UrlParam;
use crate::pages::cart_page::CartPage;
use crate::pages::home_page::HomePage;
use crate::pages::search_page::SearchPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]


    #[route("/")]
    HomePage {},


    #[route("/search/:query/:page")]
    SearchPage {
        query: UrlParam<SearchQuery>,
        page: u64,
    },


    #[route("/cart")]
    CartPage {},

}

impl Route {
    pub fn search_page_from_query(query: SearchQuery) -> Self {
        Self::SearchPage {
            query: UrlParam::from(query),
            page: 0_u64,
        }
    }
}
