use super::*;

#[test]
fn default_opens_on_connection_requests() {
    let state = PortfolioState::default();
    assert_eq!(state.tab, PortfolioTab::ConnectionRequests);
    assert_eq!(state.requests.len(), 2);
    assert_eq!(state.investments.len(), 5);
    assert_eq!(state.pending_count(), 1);
}

#[test]
fn set_tab_switches_view() {
    let mut state = PortfolioState::default();
    state.set_tab(PortfolioTab::Investments);
    assert_eq!(state.tab, PortfolioTab::Investments);
    assert_eq!(state.tab.label(), "Investments");
}

#[test]
fn accept_removes_request() {
    let mut state = PortfolioState::default();
    assert!(state.accept_request("req-1"));
    assert_eq!(state.requests.len(), 1);
    assert_eq!(state.pending_count(), 0);
    assert!(!state.accept_request("req-1"));
}

#[test]
fn reject_removes_request() {
    let mut state = PortfolioState::default();
    assert!(state.reject_request("req-2"));
    assert_eq!(state.requests[0].opportunity.id, "req-1");
}

#[test]
fn unknown_request_is_untouched() {
    let mut state = PortfolioState::default();
    assert!(!state.reject_request("req-9"));
    assert_eq!(state.requests.len(), 2);
}

#[test]
fn remove_investment_drops_listing() {
    let mut state = PortfolioState::default();
    assert!(state.remove_investment("3"));
    assert!(state.investments.iter().all(|o| o.id != "3"));
    assert!(!state.remove_investment("3"));
    assert_eq!(state.investments.len(), 4);
}
