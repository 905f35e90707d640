use tokio::sync::oneshot;

use crate::{
    Account, AccountSelection, AccountSelectionRequest, NetworkAccountResolution, NetworkRegistry,
    Result,
};

/// Narrow a target network and candidate accounts to a single pair.
///
/// Zero or one candidate resolves without touching the selection surface;
/// more than one puts a prompt in front of the user and waits, unbounded, for
/// the confirmation. `Ok(None)` means the action cannot proceed: the network
/// is not among the enabled ones, there is no eligible account, or the prompt
/// was dismissed.
pub async fn select_network_account(
    registry: &dyn NetworkRegistry,
    selector: &dyn AccountSelection,
    network_id: &str,
    accounts: Vec<Account>,
) -> Result<Option<NetworkAccountResolution>> {
    let Some(network) = registry
        .enabled_networks()
        .await?
        .into_iter()
        .find(|network| network.id == network_id)
    else {
        return Ok(None);
    };

    match accounts.len() {
        0 => Ok(None),
        1 => Ok(accounts
            .into_iter()
            .next()
            .map(|account| NetworkAccountResolution { network, account })),
        _ => {
            let (respond, chosen) = oneshot::channel();

            selector.show_account_selection(AccountSelectionRequest {
                network: network.clone(),
                accounts,
                respond,
            });

            // the sender fires at most once; a dropped sender is a dismissal
            match chosen.await {
                Ok(account) => Ok(Some(NetworkAccountResolution { network, account })),
                Err(_) => {
                    tracing::debug!(network = %network_id, "account selection dismissed");
                    Ok(None)
                }
            }
        }
    }
}
