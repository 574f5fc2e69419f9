//! Provider records compiled into the binary. Served during the build phase
//! and whenever the live store cannot answer. Kept in rough parity with the
//! database by hand; nothing here syncs the two.

use jiff::Timestamp;

use crate::models::VpnData;

/// Last editorial revision of this dataset (2025-01-01T00:00:00Z).
const REVISED_AT_MS: i64 = 1_735_689_600_000;

struct StaticVpn {
    name: &'static str,
    slug: &'static str,
    website: &'static str,
    affiliate_url: &'static str,
    price_monthly: f64,
    price_yearly: Option<f64>,
    price_two_year: Option<f64>,
    money_back_days: i32,
    free_tier: bool,
    servers: i32,
    countries: i32,
    max_devices: i32,
    speed_score: i32,
    security_score: i32,
    streaming_score: i32,
    overall_rating: f64,
    protocols: &'static [&'static str],
    kill_switch: bool,
    no_logs: bool,
    netflix_support: bool,
    torrent_support: bool,
    editor_choice: bool,
    short_description: &'static str,
    pros: &'static [&'static str],
    cons: &'static [&'static str],
    featured: bool,
    sort_order: i32,
}

const PROVIDERS: &[StaticVpn] = &[
    StaticVpn {
        name: "NordVPN",
        slug: "nordvpn",
        website: "https://nordvpn.com",
        affiliate_url: "https://go.nordvpn.net/aff_c?offer_id=15&aff_id=vpnrank",
        price_monthly: 12.99,
        price_yearly: Some(4.99),
        price_two_year: Some(2.99),
        money_back_days: 30,
        free_tier: false,
        servers: 6400,
        countries: 111,
        max_devices: 10,
        speed_score: 96,
        security_score: 98,
        streaming_score: 95,
        overall_rating: 4.8,
        protocols: &["NordLynx", "OpenVPN", "IKEv2"],
        kill_switch: true,
        no_logs: true,
        netflix_support: true,
        torrent_support: true,
        editor_choice: true,
        short_description: "Fast, audited and packed with security extras.",
        pros: &[
            "Fastest speeds we measured",
            "Independently audited no-logs policy",
            "Unblocks every major streaming service",
        ],
        cons: &["Monthly plan is expensive", "Desktop app can feel busy"],
        featured: true,
        sort_order: 1,
    },
    StaticVpn {
        name: "ExpressVPN",
        slug: "expressvpn",
        website: "https://www.expressvpn.com",
        affiliate_url: "https://www.expressvpn.com/order?a_aid=vpnrank",
        price_monthly: 12.95,
        price_yearly: Some(6.67),
        price_two_year: None,
        money_back_days: 30,
        free_tier: false,
        servers: 3000,
        countries: 105,
        max_devices: 8,
        speed_score: 93,
        security_score: 97,
        streaming_score: 94,
        overall_rating: 4.7,
        protocols: &["Lightway", "OpenVPN", "IKEv2"],
        kill_switch: true,
        no_logs: true,
        netflix_support: true,
        torrent_support: true,
        editor_choice: false,
        short_description: "Simple apps with consistently reliable connections.",
        pros: &["Very easy to use", "RAM-only servers", "Works in restrictive networks"],
        cons: &["Among the priciest options", "No multi-year plan"],
        featured: true,
        sort_order: 2,
    },
    StaticVpn {
        name: "Surfshark",
        slug: "surfshark",
        website: "https://surfshark.com",
        affiliate_url: "https://get.surfshark.net/aff_c?offer_id=926&aff_id=vpnrank",
        price_monthly: 15.45,
        price_yearly: Some(3.19),
        price_two_year: Some(2.19),
        money_back_days: 30,
        free_tier: false,
        servers: 3200,
        countries: 100,
        max_devices: 0,
        speed_score: 91,
        security_score: 93,
        streaming_score: 92,
        overall_rating: 4.6,
        protocols: &["WireGuard", "OpenVPN", "IKEv2"],
        kill_switch: true,
        no_logs: true,
        netflix_support: true,
        torrent_support: true,
        editor_choice: false,
        short_description: "Unlimited devices at a budget price.",
        pros: &["Unlimited simultaneous connections", "Low long-term price"],
        cons: &["Speeds vary on distant servers"],
        featured: true,
        sort_order: 3,
    },
    StaticVpn {
        name: "CyberGhost",
        slug: "cyberghost",
        website: "https://www.cyberghostvpn.com",
        affiliate_url: "https://www.cyberghostvpn.com/?aff_id=vpnrank",
        price_monthly: 12.99,
        price_yearly: Some(4.29),
        price_two_year: Some(2.19),
        money_back_days: 45,
        free_tier: false,
        servers: 11000,
        countries: 100,
        max_devices: 7,
        speed_score: 87,
        security_score: 90,
        streaming_score: 90,
        overall_rating: 4.4,
        protocols: &["WireGuard", "OpenVPN", "IKEv2"],
        kill_switch: true,
        no_logs: true,
        netflix_support: true,
        torrent_support: true,
        editor_choice: false,
        short_description: "Streaming-optimised servers for beginners.",
        pros: &["45-day money-back guarantee", "Servers labelled per streaming service"],
        cons: &["Slower on long-distance connections", "Based in a 14 Eyes country"],
        featured: true,
        sort_order: 4,
    },
    StaticVpn {
        name: "Private Internet Access",
        slug: "private-internet-access",
        website: "https://www.privateinternetaccess.com",
        affiliate_url: "https://www.privateinternetaccess.com/buy-vpn-online?aff=vpnrank",
        price_monthly: 11.95,
        price_yearly: Some(3.33),
        price_two_year: Some(2.03),
        money_back_days: 30,
        free_tier: false,
        servers: 35000,
        countries: 91,
        max_devices: 0,
        speed_score: 84,
        security_score: 92,
        streaming_score: 80,
        overall_rating: 4.3,
        protocols: &["WireGuard", "OpenVPN"],
        kill_switch: true,
        no_logs: true,
        netflix_support: true,
        torrent_support: true,
        editor_choice: false,
        short_description: "Highly configurable with open-source apps.",
        pros: &["Open-source clients", "Granular encryption settings"],
        cons: &["Interface is cluttered", "US jurisdiction"],
        featured: true,
        sort_order: 5,
    },
    StaticVpn {
        name: "Proton VPN",
        slug: "protonvpn",
        website: "https://protonvpn.com",
        affiliate_url: "https://protonvpn.com/pricing?ref=vpnrank",
        price_monthly: 9.99,
        price_yearly: Some(4.99),
        price_two_year: Some(4.49),
        money_back_days: 30,
        free_tier: true,
        servers: 8700,
        countries: 112,
        max_devices: 10,
        speed_score: 88,
        security_score: 97,
        streaming_score: 85,
        overall_rating: 4.5,
        protocols: &["WireGuard", "OpenVPN", "Stealth"],
        kill_switch: true,
        no_logs: true,
        netflix_support: true,
        torrent_support: true,
        editor_choice: false,
        short_description: "Swiss privacy with a genuinely usable free plan.",
        pros: &["Unlimited free tier", "Swiss jurisdiction", "Open-source and audited"],
        cons: &["Free servers get crowded"],
        featured: false,
        sort_order: 6,
    },
];

impl StaticVpn {
    fn to_view(&self, id: i32) -> VpnData {
        let revised = Timestamp::from_millisecond(REVISED_AT_MS).unwrap_or(Timestamp::UNIX_EPOCH);
        let strings = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();

        VpnData {
            id,
            name: self.name.to_string(),
            slug: self.slug.to_string(),
            logo: Some(format!("/images/vpn/{}.svg", self.slug)),
            screenshot: None,
            thumbnail_image: None,
            card_image: None,
            og_image: Some(format!("/images/og/{}.png", self.slug)),
            website: self.website.to_string(),
            affiliate_url: self.affiliate_url.to_string(),
            price_monthly: self.price_monthly,
            price_yearly: self.price_yearly,
            price_two_year: self.price_two_year,
            money_back_days: self.money_back_days,
            free_tier: self.free_tier,
            servers: self.servers,
            countries: self.countries,
            max_devices: self.max_devices,
            speed_score: self.speed_score,
            security_score: self.security_score,
            streaming_score: self.streaming_score,
            overall_rating: self.overall_rating,
            protocols: strings(self.protocols),
            encryption: "AES-256".to_string(),
            kill_switch: self.kill_switch,
            no_logs: self.no_logs,
            netflix_support: self.netflix_support,
            torrent_support: self.torrent_support,
            editor_choice: self.editor_choice,
            short_description: Some(self.short_description.to_string()),
            pros: strings(self.pros),
            cons: strings(self.cons),
            featured: self.featured,
            sort_order: self.sort_order,
            created_at: revised,
            updated_at: revised,
        }
        .normalized()
    }
}

/// The embedded dataset in `sort_order` order.
pub fn static_vpns() -> Vec<VpnData> {
    let mut vpns: Vec<VpnData> =
        PROVIDERS.iter().zip(1..).map(|(vpn, id)| vpn.to_view(id)).collect();
    vpns.sort_by_key(|v| v.sort_order);
    vpns
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn six_providers_in_sort_order() {
        let vpns = static_vpns();
        assert_eq!(vpns.len(), 6);
        let orders: Vec<i32> = vpns.iter().map(|v| v.sort_order).collect();
        assert_eq!(orders, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn five_are_featured() {
        assert_eq!(static_vpns().iter().filter(|v| v.featured).count(), 5);
    }

    #[test]
    fn nordvpn_two_year_price() {
        let vpns = static_vpns();
        let nord = vpns.iter().find(|v| v.slug == "nordvpn").unwrap();
        assert_eq!(nord.name, "NordVPN");
        assert_eq!(nord.price_two_year, Some(2.99));
    }

    #[test]
    fn names_and_slugs_are_unique() {
        let vpns = static_vpns();
        let names: HashSet<_> = vpns.iter().map(|v| v.name.as_str()).collect();
        let slugs: HashSet<_> = vpns.iter().map(|v| v.slug.as_str()).collect();
        assert_eq!(names.len(), vpns.len());
        assert_eq!(slugs.len(), vpns.len());
    }

    #[test]
    fn every_record_is_valid_admin_input() {
        for vpn in static_vpns() {
            assert!(vpn.price_ladder_is_consistent(), "{} price ladder", vpn.slug);
            crate::models::NewVpn::from(&vpn).validated().unwrap();
        }
    }
}
