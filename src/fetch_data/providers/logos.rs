const LOGO_BASE: &str = "https://cdn.jsdelivr.net/gh/curvefi/curve-assets/images/assets-arbitrum";

/// Shown whenever the CDN has no logo for a token.
pub const PLACEHOLDER_LOGO: &str =
    "https://cdn.jsdelivr.net/gh/curvefi/curve-assets/branding/logo.png";

/// Resolve the logo URL for a token address.
///
/// Best-effort existence probe: any non-success status or transport error
/// falls back to the placeholder. Never an error from the caller's view.
pub async fn resolve(client: &reqwest::Client, address: &str) -> String {
    let url = format!("{LOGO_BASE}/{}.png", address.to_lowercase());
    match client.head(&url).send().await {
        Ok(resp) if resp.status().is_success() => url,
        _ => PLACEHOLDER_LOGO.to_string(),
    }
}
