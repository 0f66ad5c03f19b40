/// VPN service identifiers GreyNoise reports in `vpn_service`
pub const VPN_SERVICES: &[&str] = &[
    "ANONINE_XPN",
    "ANONYMOUS_VPN",
    "APROVPN_VPN",
    "ASTRILL_VPN",
    "AZIREVPN_VPN",
    "BLACKBERRY_VPN",
    "BLACKVPN_VPN",
    "BOXPN_VPN",
    "CELO_VPN",
    "CHEAPNEWS_VPN",
    "CLOUDVPN_VPN",
    "CRYPTOSTORM_VPN",
    "CYBERGHOST_VPN",
    "DEEPWEB_VPN",
    "ELITE_VPN",
    "EXPRESS_VPN",
    "FASTESTVPN_VPN",
    "FREEDOME_VPN",
    "FREESSTVPN_VPN",
    "FREEVPN_VPN",
    "FROS_VPN",
    "HIDEIP_VPN",
    "HIDEME_VPN",
    "HIDE_MY_ASS_VPN",
    "HOTSPOT_VPN",
    "IBVPN_VPN",
    "IPREDATOR_VPN",
    "IPVANISH_VPN",
    "IRONSOCKET_VPN",
    "IVACY_VPN",
    "LIQUID_VPN",
    "LUNA_VPN",
    "MONSTER_VPN",
    "MULLVAD_VPN",
    "NAMECHEAP_VPN",
    "NORD_VPN",
    "OCTANE_VPN",
    "OPERA_VPN",
    "PHANTOM_AVIRA_VPN",
    "PIA_VPN",
    "PRIVATETUNNEL_VPN",
    "PRIVATEVPN_VPN",
    "PROTON_VPN",
    "PROX_VPN",
    "PURE_VPN",
    "SAFER_VPN",
    "SLICK_VPN",
    "STRONG_VPN",
    "SURFSHARK_VPN",
    "SWITCH_VPN",
    "TOR_GAURD_VPN",
    "TOTAL_VPN",
    "TOUCH_VPN",
    "TRUST_ZONE_VPN",
    "TUNNELBEAR_VPN",
    "USAIP_VPN",
    "VIRTUAL_SHEILD_VPN",
    "VPNBARON_VPN",
    "VPNBOOK_VPN",
    "VPNGATE_VPN",
    "VPNJANTIT_VPN",
    "VPNSECURE_VPN",
    "VPNTUNNEL_VPN",
    "VPNUNLIMITED_VPN",
    "VPN_HT_VPN",
    "VPN_MONSTER_VPN",
    "VYPR_VPN",
    "WINDSCRIBE_VPN",
    "ZENDESK_VPN",
    "ZORRO_VPN",
];
