use crate::domain::model::RecipeId;
use crate::utils::error::{ChefError, Result};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Dashboard,
    Detail(RecipeId),
    Recipes,
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Dashboard => "/dashboard".to_string(),
            Route::Detail(id) => format!("/detail/{}", id),
            Route::Recipes => "/recipes".to_string(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// The app's static routing table.
///
/// | path          | target                 |
/// |---------------|------------------------|
/// | `""`, `/`     | redirect to dashboard  |
/// | `/dashboard`  | [`Route::Dashboard`]   |
/// | `/detail/:id` | [`Route::Detail`]      |
/// | `/recipes`    | [`Route::Recipes`]     |
pub fn resolve(path: &str) -> Result<Route> {
    let trimmed = path.trim().trim_matches('/');
    let segments: Vec<&str> = if trimmed.is_empty() {
        Vec::new()
    } else {
        trimmed.split('/').collect()
    };

    match segments.as_slice() {
        [] => Ok(Route::Dashboard),
        ["dashboard"] => Ok(Route::Dashboard),
        ["recipes"] => Ok(Route::Recipes),
        ["detail", id] => parse_id(id).map(Route::Detail),
        _ => Err(ChefError::RouteNotFound {
            path: path.to_string(),
        }),
    }
}

fn parse_id(raw: &str) -> Result<RecipeId> {
    // decimal digits only, so "+7" and " 7" are rejected
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ChefError::InvalidRouteParameter {
            param: "id".to_string(),
            value: raw.to_string(),
        });
    }
    raw.parse().map_err(|_| ChefError::InvalidRouteParameter {
        param: "id".to_string(),
        value: raw.to_string(),
    })
}
