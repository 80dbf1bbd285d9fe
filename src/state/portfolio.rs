//! Investor portfolio: incoming connection requests and current investments.
//!
//! SYSTEM CONTEXT
//! ==============
//! Backs `/investor/portfolio`. Responses to requests are local only; there
//! is no backend to notify.

#[cfg(test)]
#[path = "portfolio_test.rs"]
mod portfolio_test;

use crate::net::mock;
use crate::net::types::{ConnectionRequest, Opportunity, RequestStatus};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PortfolioTab {
    #[default]
    ConnectionRequests,
    Investments,
}

impl PortfolioTab {
    pub fn label(self) -> &'static str {
        match self {
            Self::ConnectionRequests => "Connection Requests",
            Self::Investments => "Investments",
        }
    }
}

#[derive(Clone, Debug)]
pub struct PortfolioState {
    pub tab: PortfolioTab,
    pub requests: Vec<ConnectionRequest>,
    pub investments: Vec<Opportunity>,
}

impl Default for PortfolioState {
    fn default() -> Self {
        Self { tab: PortfolioTab::default(), requests: mock::connection_requests(), investments: mock::opportunities() }
    }
}

impl PortfolioState {
    pub fn set_tab(&mut self, tab: PortfolioTab) {
        self.tab = tab;
    }

    /// "Awaiting Responses" stat.
    pub fn pending_count(&self) -> usize {
        self.requests.iter().filter(|r| r.status == RequestStatus::Pending).count()
    }

    pub fn accept_request(&mut self, id: &str) -> bool {
        let removed = self.take_request(id);
        if removed {
            log::info!("accepted connection request {id}");
        }
        removed
    }

    pub fn reject_request(&mut self, id: &str) -> bool {
        let removed = self.take_request(id);
        if removed {
            log::info!("rejected connection request {id}");
        }
        removed
    }

    pub fn remove_investment(&mut self, id: &str) -> bool {
        let before = self.investments.len();
        self.investments.retain(|o| o.id != id);
        let removed = self.investments.len() != before;
        if removed {
            log::info!("removed investment {id}");
        }
        removed
    }

    fn take_request(&mut self, id: &str) -> bool {
        let before = self.requests.len();
        self.requests.retain(|r| r.opportunity.id != id);
        self.requests.len() != before
    }
}
