//! Site-wide constants: brand contact details and asset locations.

/// WhatsApp number for the floating chat link, digits only
/// (country code included, no `+`).
pub const WHATSAPP_PHONE: &str = "919810863495";

/// Country-code prefix shown next to the contact form's phone field.
pub const PHONE_PREFIX: &str = "IND +91";

/// All marketing imagery is served from the external asset host; the site
/// never stores or transforms media itself.
pub const LOGO_URL: &str =
    "https://res.cloudinary.com/dzgfkhpl1/image/upload/v1757493494/kahani_logo_cyvn22.png";

pub fn whatsapp_url() -> String {
    format!("https://wa.me/{}", WHATSAPP_PHONE)
}
