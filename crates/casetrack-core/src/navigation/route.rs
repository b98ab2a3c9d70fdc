//! The navigation surface: which paths exist and which role each requires.

use crate::session::Role;

const OFFICER_BASE: &str = "/officer/dashboard";
const COMPLAINANT_BASE: &str = "/complainant/dashboard";

/// Screens inside `/officer/dashboard/*`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OfficerScreen {
    Analytics,
    RegisterFir,
    AllFirs,
    AddOfficer,
    AddComplainant,
    AllComplainants,
    AddStation,
    AllOfficers,
    AllStations,
    Profile,
    FirDetail(String),
    NotFound,
}

/// Screens inside `/complainant/dashboard/*`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComplainantScreen {
    MyFirs,
    Profile,
    FirDetail(String),
    NotFound,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    ComplainantLogin,
    OfficerLogin,
    RegisterComplainant,
    Officer(OfficerScreen),
    Complainant(ComplainantScreen),
}

impl Route {
    /// Matches a location path. Returns `None` for paths outside every
    /// subtree; unknown paths inside a gated subtree resolve to its
    /// `NotFound` screen.
    pub fn parse(path: &str) -> Option<Route> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');

        match trimmed {
            "" => return Some(Route::ComplainantLogin),
            "/officer/login" => return Some(Route::OfficerLogin),
            "/register-complainant" => return Some(Route::RegisterComplainant),
            _ => {}
        }

        if let Some(rest) = subtree_rest(trimmed, OFFICER_BASE) {
            return Some(Route::Officer(parse_officer(rest)));
        }
        if let Some(rest) = subtree_rest(trimmed, COMPLAINANT_BASE) {
            return Some(Route::Complainant(parse_complainant(rest)));
        }
        None
    }

    /// The role a guard must see before rendering this route.
    pub fn required_role(&self) -> Option<Role> {
        match self {
            Route::Officer(_) => Some(Role::Officer),
            Route::Complainant(_) => Some(Role::Complainant),
            _ => None,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::ComplainantLogin => "/".to_string(),
            Route::OfficerLogin => "/officer/login".to_string(),
            Route::RegisterComplainant => "/register-complainant".to_string(),
            Route::Officer(screen) => {
                let tail = match screen {
                    OfficerScreen::Analytics => return OFFICER_BASE.to_string(),
                    OfficerScreen::RegisterFir => "register-fir".to_string(),
                    OfficerScreen::AllFirs => "all-fir".to_string(),
                    OfficerScreen::AddOfficer => "add-officer".to_string(),
                    OfficerScreen::AddComplainant => "add-complainant".to_string(),
                    OfficerScreen::AllComplainants => "all-complainant".to_string(),
                    OfficerScreen::AddStation => "add-station".to_string(),
                    OfficerScreen::AllOfficers => "all-officers".to_string(),
                    OfficerScreen::AllStations => "all-stations".to_string(),
                    OfficerScreen::Profile => "profile".to_string(),
                    OfficerScreen::FirDetail(id) => format!("fir-detail/{}", id),
                    OfficerScreen::NotFound => "not-found".to_string(),
                };
                format!("{}/{}", OFFICER_BASE, tail)
            }
            Route::Complainant(screen) => {
                let tail = match screen {
                    ComplainantScreen::MyFirs => return COMPLAINANT_BASE.to_string(),
                    ComplainantScreen::Profile => "profile".to_string(),
                    ComplainantScreen::FirDetail(id) => format!("fir-detail/{}", id),
                    ComplainantScreen::NotFound => "not-found".to_string(),
                };
                format!("{}/{}", COMPLAINANT_BASE, tail)
            }
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Route::Officer(OfficerScreen::NotFound) | Route::Complainant(ComplainantScreen::NotFound)
        )
    }

    /// Link offered by a NotFound screen: the owning role's home.
    pub fn home_link(&self) -> Option<&'static str> {
        self.required_role().map(|role| role.home_path())
    }
}

/// `Some(rest)` if `path` is `base` or lies below it.
fn subtree_rest<'a>(path: &'a str, base: &str) -> Option<&'a str> {
    let rest = path.strip_prefix(base)?;
    if rest.is_empty() {
        Some("")
    } else {
        rest.strip_prefix('/')
    }
}

fn parse_officer(rest: &str) -> OfficerScreen {
    match rest {
        "" => OfficerScreen::Analytics,
        "register-fir" => OfficerScreen::RegisterFir,
        "all-fir" => OfficerScreen::AllFirs,
        "add-officer" => OfficerScreen::AddOfficer,
        "add-complainant" => OfficerScreen::AddComplainant,
        "all-complainant" => OfficerScreen::AllComplainants,
        "add-station" => OfficerScreen::AddStation,
        "all-officers" => OfficerScreen::AllOfficers,
        "all-stations" => OfficerScreen::AllStations,
        "profile" => OfficerScreen::Profile,
        other => match fir_detail_id(other) {
            Some(id) => OfficerScreen::FirDetail(id),
            None => OfficerScreen::NotFound,
        },
    }
}

fn parse_complainant(rest: &str) -> ComplainantScreen {
    match rest {
        "" => ComplainantScreen::MyFirs,
        "profile" => ComplainantScreen::Profile,
        other => match fir_detail_id(other) {
            Some(id) => ComplainantScreen::FirDetail(id),
            None => ComplainantScreen::NotFound,
        },
    }
}

fn fir_detail_id(rest: &str) -> Option<String> {
    let id = rest.strip_prefix("fir-detail/")?;
    (!id.is_empty() && !id.contains('/')).then(|| id.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_routes() {
        assert_eq!(Route::parse("/"), Some(Route::ComplainantLogin));
        assert_eq!(Route::parse("/officer/login"), Some(Route::OfficerLogin));
        assert_eq!(
            Route::parse("/register-complainant"),
            Some(Route::RegisterComplainant)
        );
        assert_eq!(Route::parse("/nowhere"), None);
    }

    #[test]
    fn test_officer_subtree() {
        assert_eq!(
            Route::parse("/officer/dashboard"),
            Some(Route::Officer(OfficerScreen::Analytics))
        );
        assert_eq!(
            Route::parse("/officer/dashboard/all-fir?page=2"),
            Some(Route::Officer(OfficerScreen::AllFirs))
        );
        assert_eq!(
            Route::parse("/officer/dashboard/fir-detail/abc-123"),
            Some(Route::Officer(OfficerScreen::FirDetail("abc-123".into())))
        );
        assert_eq!(
            Route::parse("/officer/dashboard/settings"),
            Some(Route::Officer(OfficerScreen::NotFound))
        );
        assert_eq!(Route::parse("/officer/dashboardx"), None);
    }

    #[test]
    fn test_complainant_subtree_not_found_links_home() {
        let route = Route::parse("/complainant/dashboard/all-officers").unwrap();
        assert!(route.is_not_found());
        assert_eq!(route.home_link(), Some("/complainant/dashboard"));
        assert_eq!(route.required_role(), Some(Role::Complainant));
    }

    #[test]
    fn test_path_round_trip() {
        let routes = [
            Route::Officer(OfficerScreen::AllStations),
            Route::Officer(OfficerScreen::FirDetail("f1".into())),
            Route::Complainant(ComplainantScreen::MyFirs),
            Route::OfficerLogin,
        ];
        for route in routes {
            assert_eq!(Route::parse(&route.path()), Some(route));
        }
    }
}
