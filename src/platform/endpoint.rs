use std::fmt;

/// Platform endpoints the probe calls. All are plain authenticated GETs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// List agents visible to the token; used to check the token itself.
    ListAgents,
    /// Agent metadata.
    AgentInfo { bot_id: String },
    /// Agent online (published) configuration, including shortcuts.
    OnlineInfo { bot_id: String },
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::ListAgents => "/v1/bots",
            Endpoint::AgentInfo { .. } => "/v1/bot/get",
            Endpoint::OnlineInfo { .. } => "/v1/bot/get_online_info",
        }
    }

    pub fn query(&self) -> Vec<(&'static str, &str)> {
        match self {
            Endpoint::ListAgents => Vec::new(),
            Endpoint::AgentInfo { bot_id } | Endpoint::OnlineInfo { bot_id } => {
                vec![("bot_id", bot_id.as_str())]
            }
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GET {}", self.path())?;
        for (i, (key, value)) in self.query().iter().enumerate() {
            let sep = if i == 0 { '?' } else { '&' };
            write!(f, "{}{}={}", sep, key, value)?;
        }
        Ok(())
    }
}
