use std::fmt;

/// The documents written by the simulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetKind {
    /// Per-(interest, n_transactions) summaries of a simulation sweep.
    Simulations,
    /// One entry per transaction of a single simulation.
    Transactions,
    /// Market holdings per currency after every transaction.
    Market,
    /// Trader holdings per currency after every transaction.
    Trader,
    /// Wallet snapshots, written as a bare array.
    Wallet,
}

impl DatasetKind {
    /// The field of the top-level object holding the records, if the kind is wrapped.
    pub fn array_field(&self) -> Option<&'static str> {
        match self {
            DatasetKind::Simulations => Some("simulations"),
            DatasetKind::Transactions => Some("transactions"),
            DatasetKind::Market => Some("market"),
            DatasetKind::Trader => Some("trader"),
            DatasetKind::Wallet => None,
        }
    }

    /// File name the simulator uses for this kind.
    pub fn default_file_name(&self) -> &'static str {
        match self {
            DatasetKind::Simulations => "simulations.json",
            DatasetKind::Transactions => "single_sim_transactions.json",
            DatasetKind::Market => "single_sim_market.json",
            DatasetKind::Trader => "single_sim_trader.json",
            DatasetKind::Wallet => "wallet.json",
        }
    }
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DatasetKind::Simulations => "simulations",
            DatasetKind::Transactions => "transactions",
            DatasetKind::Market => "market",
            DatasetKind::Trader => "trader",
            DatasetKind::Wallet => "wallet",
        };
        f.write_str(name)
    }
}
