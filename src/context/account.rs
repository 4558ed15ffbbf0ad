use super::{Error, TwitterContext};
use crate::net::{Attachment, Execute};
use crate::request::{AccountType, HttpMethod};
use crate::response::{Account, Settings, User};
use strum_macros::{Display, EnumString};

/// Profile fields to change; unset fields are left as they are.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub url: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub include_entities: bool,
    pub skip_status: bool,
}

/// Profile colours as hex triplets (`"3C3940"`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileColors {
    pub background: Option<String>,
    pub link: Option<String>,
    pub sidebar_border: Option<String>,
    pub sidebar_fill: Option<String>,
    pub text: Option<String>,
    pub include_entities: bool,
    pub skip_status: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsUpdate {
    pub trend_location_woeid: Option<u64>,
    pub sleep_time_enabled: Option<bool>,
    /// Hour of the day, 00-23
    pub start_sleep_time: Option<u8>,
    pub end_sleep_time: Option<u8>,
    pub time_zone: Option<String>,
    pub lang: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum DeviceType {
    Sms,
    None,
}

/// An image to upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Image<'a> {
    pub data: &'a [u8],
    pub file_name: &'a str,
    /// e.g. `image/png`
    pub content_type: &'a str,
}

impl<'a> Image<'a> {
    pub fn new(data: &'a [u8], file_name: &'a str, content_type: &'a str) -> Self {
        Self {
            data,
            file_name,
            content_type,
        }
    }

    fn validate(&self, data_param: &'static str) -> Result<(), Error> {
        if self.data.is_empty() {
            Err(Error::invalid(data_param, "no image data"))
        } else if self.file_name.trim().is_empty() {
            Err(Error::invalid("fileName", "a file name is required"))
        } else if self.content_type.trim().is_empty() {
            Err(Error::invalid("imageType", "an image type is required"))
        } else {
            Ok(())
        }
    }

    pub(crate) fn as_part(&self, name: &'a str) -> Attachment<'a> {
        Attachment {
            data: self.data,
            name,
            file_name: self.file_name,
            content_type: self.content_type,
        }
    }
}

/// How to crop an uploaded banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BannerSize {
    pub width: u32,
    pub height: u32,
    pub offset_left: u32,
    pub offset_top: u32,
}

fn check_length(param: &'static str, value: &Option<String>, max: usize) -> Result<(), Error> {
    match value {
        Some(value) if value.chars().count() > max => Err(Error::invalid(
            param,
            format!("may be at most {} characters", max),
        )),
        _ => Ok(()),
    }
}

impl<E: Execute> TwitterContext<E> {
    pub async fn update_account_profile(&self, profile: &ProfileUpdate) -> Result<User, Error> {
        let ProfileUpdate {
            name,
            url,
            location,
            description,
            ..
        } = profile;
        if name.is_none() && url.is_none() && location.is_none() && description.is_none() {
            return Err(Error::invalid(
                "NoInput",
                "set at least one of name, url, location or description",
            ));
        }
        check_length("name", name, 20)?;
        check_length("url", url, 100)?;
        check_length("location", location, 30)?;
        check_length("description", description, 160)?;

        let mut req = self.api_request("account/update_profile.json");
        req.add_opt("name", name.as_deref());
        req.add_opt("url", url.as_deref());
        req.add_opt("location", location.as_deref());
        req.add_opt("description", description.as_deref());
        req.add("include_entities", profile.include_entities);
        req.add("skip_status", profile.skip_status);
        self.send(HttpMethod::Post, req).await
    }

    pub async fn update_account_colors(&self, colors: &ProfileColors) -> Result<User, Error> {
        let pairs = [
            ("profile_background_color", &colors.background),
            ("profile_link_color", &colors.link),
            ("profile_sidebar_border_color", &colors.sidebar_border),
            ("profile_sidebar_fill_color", &colors.sidebar_fill),
            ("profile_text_color", &colors.text),
        ];
        if pairs.iter().all(|(_, color)| color.is_none()) {
            return Err(Error::invalid("NoInput", "set at least one colour"));
        }

        let mut req = self.api_request("account/update_profile_colors.json");
        for (param, color) in pairs.iter() {
            req.add_opt(param, color.as_deref());
        }
        req.add("include_entities", colors.include_entities);
        req.add("skip_status", colors.skip_status);
        self.send(HttpMethod::Post, req).await
    }

    pub async fn update_account_image(&self, image: Image<'_>, skip_status: bool) -> Result<User, Error> {
        image.validate("image")?;
        let mut req = self.api_request("account/update_profile_image.json");
        req.add("skip_status", skip_status);
        let body = self
            .exec
            .post_image(req.endpoint(), req.params(), image.as_part("image"))
            .await?;
        Ok(serde_json::from_str(&body)?)
    }

    pub async fn update_account_background_image(
        &self,
        image: Image<'_>,
        tile: bool,
        skip_status: bool,
    ) -> Result<User, Error> {
        image.validate("image")?;
        let mut req = self.api_request("account/update_profile_background_image.json");
        req.add("tile", tile);
        req.add("skip_status", skip_status);
        let body = self
            .exec
            .post_image(req.endpoint(), req.params(), image.as_part("image"))
            .await?;
        Ok(serde_json::from_str(&body)?)
    }

    pub async fn update_account_settings(&self, settings: &SettingsUpdate) -> Result<Account, Error> {
        if settings == &SettingsUpdate::default() {
            return Err(Error::invalid("NoInput", "set at least one setting"));
        }

        let mut req = self.api_request("account/settings.json");
        req.add_opt("trend_location_woeid", settings.trend_location_woeid);
        req.add_opt("sleep_time_enabled", settings.sleep_time_enabled);
        req.add_opt("start_sleep_time", settings.start_sleep_time);
        req.add_opt("end_sleep_time", settings.end_sleep_time);
        req.add_opt("time_zone", settings.time_zone.as_deref());
        req.add_opt("lang", settings.lang.as_deref());
        let settings: Settings = self.send(HttpMethod::Post, req).await?;
        Ok(Account {
            kind: AccountType::Settings,
            settings: Some(settings),
            ..Account::default()
        })
    }

    pub async fn update_delivery_device(
        &self,
        device: DeviceType,
        include_entities: bool,
    ) -> Result<User, Error> {
        let mut req = self.api_request("account/update_delivery_device.json");
        req.add("device", device);
        req.add("include_entities", include_entities);
        self.send(HttpMethod::Post, req).await
    }

    /// Answers with `None` when the API acknowledges the banner without a body.
    pub async fn update_profile_banner(
        &self,
        banner: Image<'_>,
        size: Option<BannerSize>,
    ) -> Result<Option<User>, Error> {
        banner.validate("banner")?;
        let mut req = self.api_request("account/update_profile_banner.json");
        if let Some(size) = size {
            req.add("width", size.width);
            req.add("height", size.height);
            req.add("offset_left", size.offset_left);
            req.add("offset_top", size.offset_top);
        }
        let body = self
            .exec
            .post_image(req.endpoint(), req.params(), banner.as_part("banner"))
            .await?;
        if body.trim().is_empty() {
            Ok(None)
        } else {
            Ok(Some(serde_json::from_str(&body)?))
        }
    }

    pub async fn remove_profile_banner(&self) -> Result<Option<User>, Error> {
        self.send_maybe_empty(self.api_request("account/remove_profile_banner.json"))
            .await
    }
}
