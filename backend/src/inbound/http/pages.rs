//! HTML fragments for the directory pages.
//!
//! Every function here is pure: it takes resolved lookup results and returns
//! markup. Templates live under `backend/templates` and escape all
//! interpolated values.

use askama::Template;

use crate::domain::{Error, OwnerProfile, PetProfile};

#[derive(Template)]
#[template(path = "index.html")]
struct IndexPage;

#[derive(Template)]
#[template(path = "pet.html")]
struct PetPage<'a> {
    profile: &'a PetProfile,
}

#[derive(Template)]
#[template(path = "owner.html")]
struct OwnerPage<'a> {
    profile: &'a OwnerProfile,
}

#[derive(Template)]
#[template(path = "not_found.html")]
struct NotFoundPage {
    record: &'static str,
}

fn render<T: Template>(page: &T) -> Result<String, Error> {
    page.render()
        .map_err(|err| Error::internal(format!("failed to render page: {err}")))
}

/// Welcome banner served at `/`.
pub fn render_index() -> Result<String, Error> {
    render(&IndexPage)
}

/// Pet name, species, and owner line.
///
/// # Examples
/// ```
/// use pet_directory::domain::{Owner, OwnerId, Pet, PetId, PetProfile};
/// use pet_directory::inbound::http::pages::render_pet;
///
/// let jo = Owner::new(OwnerId::new(1), "Jo");
/// let rex = Pet::new(PetId::new(1), "Rex", "Dog", Some(jo.id));
/// let html = render_pet(&PetProfile::new(rex, Some(jo))).expect("renders");
/// assert!(html.contains("<h2>Pet Owner is Jo</h2>"));
/// ```
pub fn render_pet(profile: &PetProfile) -> Result<String, Error> {
    render(&PetPage { profile })
}

/// Owner name followed by one line per pet, or a placeholder when the owner
/// has none.
pub fn render_owner(profile: &OwnerProfile) -> Result<String, Error> {
    render(&OwnerPage { profile })
}

pub fn render_pet_not_found() -> Result<String, Error> {
    render(&NotFoundPage { record: "pet" })
}

pub fn render_owner_not_found() -> Result<String, Error> {
    render(&NotFoundPage { record: "owner" })
}
