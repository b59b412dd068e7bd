//! Files compiled into the binary: HTML views and `/js`, `/css` assets.

macro_rules! asset_file {
    ($path:literal) => {
        include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/", $path))
    };
}

pub const HOME_PAGE: &str = asset_file!("views/home.html");
pub const FORM_PAGE: &str = asset_file!("views/formulaire.html");
pub const USER_DETAIL_PAGE: &str = asset_file!("views/user-detail.html");
pub const NOT_FOUND_PAGE: &str = asset_file!("views/not-found.html");

/// A static file served under its public path.
#[derive(Debug)]
pub struct StaticAsset {
    pub path: &'static str,
    pub content_type: &'static str,
    pub body: &'static str,
}

const JS: &str = "text/javascript; charset=utf-8";
const CSS: &str = "text/css; charset=utf-8";

pub static STATIC_ASSETS: &[StaticAsset] = &[
    StaticAsset {
        path: "/js/app.js",
        content_type: JS,
        body: asset_file!("public/js/app.js"),
    },
    StaticAsset {
        path: "/js/home.js",
        content_type: JS,
        body: asset_file!("public/js/home.js"),
    },
    StaticAsset {
        path: "/js/formulaire.js",
        content_type: JS,
        body: asset_file!("public/js/formulaire.js"),
    },
    StaticAsset {
        path: "/js/user-detail.js",
        content_type: JS,
        body: asset_file!("public/js/user-detail.js"),
    },
    StaticAsset {
        path: "/css/style.css",
        content_type: CSS,
        body: asset_file!("public/css/style.css"),
    },
];

pub fn find_asset(path: &str) -> Option<&'static StaticAsset> {
    STATIC_ASSETS.iter().find(|asset| asset.path == path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_page_references_existing_assets() {
        for page in [HOME_PAGE, FORM_PAGE, USER_DETAIL_PAGE, NOT_FOUND_PAGE] {
            for attr in ["src=\"", "href=\""] {
                for chunk in page.split(attr).skip(1) {
                    let target = chunk.split('"').next().unwrap_or_default();
                    if target.starts_with("/js/") || target.starts_with("/css/") {
                        assert!(find_asset(target).is_some(), "missing asset {target}");
                    }
                }
            }
        }
    }

    #[test]
    fn unknown_asset_is_none() {
        assert!(find_asset("/js/missing.js").is_none());
    }

    const DECLARATION_KEYWORDS: &[&str] =
        &["async function ", "function ", "const ", "let ", "var ", "class "];

    /// Names bound at column 0 of a classic script, destructuring included.
    fn top_level_names(source: &str) -> Vec<String> {
        let mut names = Vec::new();
        let mut offset = 0;
        for line in source.split('\n') {
            let start = offset;
            offset += line.len() + 1;
            let Some(keyword) = DECLARATION_KEYWORDS.iter().find(|k| line.starts_with(**k)) else {
                continue;
            };
            let rest = &source[start + keyword.len()..];
            if let Some(pattern) = rest.strip_prefix('{') {
                let inner = pattern.split('}').next().unwrap_or_default();
                for binding in inner.split(',') {
                    let name = binding.rsplit(':').next().unwrap_or_default().trim();
                    if !name.is_empty() {
                        names.push(name.to_string());
                    }
                }
            } else {
                let name: String = rest
                    .chars()
                    .take_while(|c| c.is_alphanumeric() || *c == '_' || *c == '$')
                    .collect();
                if !name.is_empty() {
                    names.push(name);
                }
            }
        }
        names
    }

    fn script(path: &str) -> &'static str {
        find_asset(path).unwrap().body
    }

    #[test]
    fn top_level_names_sees_functions_and_destructuring() {
        let source = "function h() {}\nconst {\n    apiRequest,\n    mount: m,\n} = x;\n    const inner = 1;\n";
        assert_eq!(top_level_names(source), ["h", "apiRequest", "m"]);
    }

    #[test]
    fn page_scripts_do_not_redeclare_shared_names() {
        let shared = top_level_names(script("/js/app.js"));
        for page in ["/js/home.js", "/js/formulaire.js", "/js/user-detail.js"] {
            let clashes: Vec<String> = top_level_names(script(page))
                .into_iter()
                .filter(|name| shared.contains(name))
                .collect();
            assert!(clashes.is_empty(), "{page} redeclares {clashes:?}");
        }
    }

    #[test]
    fn shared_helpers_are_exposed_as_app_utils() {
        let app = script("/js/app.js");
        assert!(app.contains("window.AppUtils = {"));
        for page in ["/js/home.js", "/js/formulaire.js", "/js/user-detail.js"] {
            assert!(script(page).contains("window.AppUtils"), "{page} does not use AppUtils");
        }
    }

    #[test]
    fn every_shared_helper_is_used_by_a_page() {
        let app = script("/js/app.js");
        let exports = app
            .split("window.AppUtils = {")
            .nth(1)
            .and_then(|rest| rest.split('}').next())
            .unwrap();
        let pages = ["/js/home.js", "/js/formulaire.js", "/js/user-detail.js"].map(script);

        for name in exports.split(',').map(str::trim).filter(|n| !n.is_empty()) {
            assert!(pages.iter().any(|page| page.contains(name)), "{name} is never used");
        }
    }

    #[test]
    fn creation_form_returns_home_after_success() {
        assert!(script("/js/formulaire.js").contains("redirectTo('/')"));
    }
}
