use crate::gnql::{Clause, GnqlTool};
use crate::vpn::VPN_SERVICES;

const CLASSIFICATION: &str = "The classification to get the data from eg. malicious or benign";

/// Every GNQL search the model can call
pub fn gnql_tools() -> Vec<GnqlTool> {
    vec![
        GnqlTool::new("run_greynoise_query", "Run an ip query on greynoise.io", 20)
            .argument("ip", "The ip to get the data from")
            .clause(Clause::Argument("ip")),
        GnqlTool::new("get_mal_tor", "Get the malicious ip addresses using tor", 20)
            .clause(Clause::Fixed("classification:malicious"))
            .clause(Clause::Fixed("metadata.tor:true")),
        GnqlTool::new(
            "get_category_with_classification",
            "Get the ip addresses with a specific category and classification",
            20,
        )
        .argument("classification", CLASSIFICATION)
        .argument(
            "category",
            "The category to get the data from, eg. business, isp, hosting, education, or mobile network",
        )
        .clause(Clause::field("classification", "classification"))
        .clause(Clause::field("metadata.category", "category")),
        GnqlTool::new("get_bot_data", "Get the bot data from greynoise.io", 2)
            .argument("classification", CLASSIFICATION)
            .argument("useragent", "The useragent to get the data from eg. Googlebot")
            .clause(Clause::field("classification", "classification"))
            .clause(Clause::field("raw_data.web.useragents", "useragent"))
            .clause(Clause::Fixed("bot:true")),
        GnqlTool::new("get_vpn_with_classification", "Get the vpn data from greynoise.io", 8)
            .argument("classification", CLASSIFICATION)
            .argument(
                "vpn_service",
                format!("The vpn service to get the data from eg. {}", VPN_SERVICES.join(", ")),
            )
            .clause(Clause::field("classification", "classification"))
            .clause(Clause::Fixed("vpn:true"))
            .clause(Clause::field("vpn_service", "vpn_service")),
        GnqlTool::new(
            "get_organisation_with_classification",
            "Get the organisation data from greynoise.io",
            20,
        )
        .argument("classification", CLASSIFICATION)
        .argument("organisation", "The organisation to get the data from eg. Google")
        .clause(Clause::field("classification", "classification"))
        .clause(Clause::field("organization", "organisation")),
        GnqlTool::new("get_malicious_ports", "Get the malicious ports from greynoise.io", 3)
            .argument("port", "The port to get the data from eg. 22")
            .clause(Clause::Fixed("classification:malicious"))
            .clause(Clause::field("raw_data.scan.port", "port")),
        GnqlTool::new(
            "get_country_with_classification",
            "Get the country data from greynoise.io",
            10,
        )
        .argument("classification", CLASSIFICATION)
        .argument("country", "The country to get the data from eg. India")
        .clause(Clause::field("classification", "classification"))
        .clause(Clause::field("metadata.country", "country")),
        GnqlTool::new("port_search_with_os", "Get the port data from greynoise.io", 20)
            .argument("os", "The os to get the data from eg. Linux")
            .argument("port", "The port to get the data from eg. 22")
            .clause(Clause::field("raw_data.scan.port", "port"))
            .clause(Clause::field("os", "os")),
        GnqlTool::new(
            "city_search_with_classification",
            "Get the city data from greynoise.io",
            20,
        )
        .argument("classification", CLASSIFICATION)
        .argument("city", "The city to get the data from eg. Mumbai")
        .clause(Clause::field("classification", "classification"))
        .clause(Clause::field("metadata.city", "city")),
        GnqlTool::new(
            "get_rdns_data",
            "Get the rdns data from greynoise.io, which includes searching for tlds of country sites like *.in, *.us, etc",
            20,
        )
        .argument("classification", CLASSIFICATION)
        .argument(
            "rdns",
            "The rdns to get the data from eg. google.com, *.gov.*, *.edu.*, *.google.com",
        )
        .clause(Clause::field("classification", "classification"))
        .clause(Clause::field("rdns", "rdns")),
        GnqlTool::new("get_path_with_cve", "Get the path data from greynoise.io", 5)
            .argument("path", "The path to get the data from eg. /wp-login.php")
            .argument("cve", "The cve to get the data from eg. CVE-2019-11510")
            .clause(Clause::field("cve", "cve"))
            .clause(Clause::field("raw_data.web.paths", "path")),
    ]
}
