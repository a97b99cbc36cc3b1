//! Network actor - runs backend calls in the Tokio async runtime

use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::messages::{NetworkCommand, NetworkResponse};
use crate::network::client::ApiClient;

/// Network actor that processes directory commands
///
/// Each command is spawned into a `JoinSet` so a slow backend call never
/// blocks the command loop; every call produces exactly one response.
pub struct NetworkActor {
    api: ApiClient,
    response_tx: mpsc::UnboundedSender<NetworkResponse>,
    in_flight: JoinSet<()>,
}

impl NetworkActor {
    pub fn new(api: ApiClient, response_tx: mpsc::UnboundedSender<NetworkResponse>) -> Self {
        NetworkActor {
            api,
            response_tx,
            in_flight: JoinSet::new(),
        }
    }

    /// Run the network actor message loop
    pub async fn run(mut self, mut cmd_rx: mpsc::UnboundedReceiver<NetworkCommand>) {
        loop {
            tokio::select! {
                biased;

                cmd = cmd_rx.recv() => {
                    match cmd {
                        Some(NetworkCommand::FetchDrivers { seq }) => {
                            let response_tx = self.response_tx.clone();
                            let api = self.api.clone();

                            self.in_flight.spawn(async move {
                                tracing::info!(seq, "fetching driver listing");
                                let result = api.fetch_drivers(seq).await;
                                let _ = response_tx.send(result);
                            });
                        }

                        Some(NetworkCommand::ApproveDriver { seq, driver_id }) => {
                            let response_tx = self.response_tx.clone();
                            let api = self.api.clone();

                            self.in_flight.spawn(async move {
                                tracing::info!(seq, driver_id, "posting document approval");
                                let result = api.approve_driver(seq, driver_id).await;
                                let _ = response_tx.send(result);
                            });
                        }

                        Some(NetworkCommand::UpdateBalance { seq, driver_id, balance }) => {
                            let response_tx = self.response_tx.clone();
                            let api = self.api.clone();

                            self.in_flight.spawn(async move {
                                tracing::info!(seq, driver_id, balance, "posting balance update");
                                let result = api.update_balance(seq, driver_id, balance).await;
                                let _ = response_tx.send(result);
                            });
                        }

                        Some(NetworkCommand::Shutdown) | None => break,
                    }
                }

                // Reap completed tasks
                Some(_result) = self.in_flight.join_next() => {}
            }
        }
    }
}
