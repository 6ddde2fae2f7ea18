/// Static text of the landing page.
pub struct HomeContent {
    pub title: &'static str,
    pub intro: &'static str,
    /// (bold lead, rest of the line)
    pub features: [(&'static str, &'static str); 3],
    pub source_note: &'static str,
    pub source_url: &'static str,
}

pub fn content() -> HomeContent {
    HomeContent {
        title: "MLB Free Agent Analysis Tool",
        intro: "Welcome to the MLB Free Agent Analysis Tool! Use this app to:",
        features: [
            (
                "Search & Compare free agents",
                "Filter by season, player type and data type, or compare specific players.",
            ),
            (
                "Upcoming free agents",
                "View the most recent free agent class.",
            ),
            (
                "Top leaders",
                "Rank the top players in any stat by free agency class.",
            ),
        ],
        source_note: "Data is pulled from FanGraphs.com and covers free agents from 2022 - 2025.",
        source_url: "https://www.fangraphs.com",
    }
}
