use super::{
    compute_token_list, compute_usd_total, fetch_balances, BalanceSource, PriceTable,
    RawBalances, Token,
};
use alloy::primitives::Address;
use alloy_chains::Chain;
use std::collections::VecDeque;

/// USD total shown while there is nothing to value.
pub const ZERO_TOTAL: &str = "0.00";

/// State of the token list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListState {
    /// No wallet, empty list.
    #[default]
    Disconnected,
    /// A fetch for the latest snapshot is outstanding.
    Loading,
    /// List and total are current, tokens can be selected.
    Loaded,
}

/// A balance fetch the list is waiting for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchRequest {
    /// Only the result of the latest generation is accepted.
    pub generation: u64,
    pub address: Address,
    pub chain: Chain,
}

/// Inputs that drive the token list.
#[derive(Debug, Clone)]
pub enum ListEvent {
    Connected { address: Address, chain: Chain },
    AddressChanged(Address),
    ChainChanged(Chain),
    /// Balances may have changed on-chain, e.g. a new block.
    BalancesChanged,
    Disconnected,
    /// Balances read for the request with the given generation.
    Fetched {
        generation: u64,
        balances: RawBalances,
    },
}

/// The derived token list of a connected wallet.
///
/// Every input change bumps the generation and moves the list to [`ListState::Loading`];
/// the list and total are replaced once the matching fetch arrives, results of older
/// generations are dropped.
#[derive(Debug)]
pub struct TokenList {
    state: ListState,
    prices: PriceTable,
    connection: Option<(Address, Chain)>,
    generation: u64,
    tokens: Vec<Token>,
    total: String,
    queue: VecDeque<ListEvent>,
}

impl TokenList {
    pub fn new(prices: PriceTable) -> Self {
        Self {
            state: ListState::Disconnected,
            prices,
            connection: None,
            generation: 0,
            tokens: Vec::new(),
            total: ZERO_TOTAL.to_string(),
            queue: VecDeque::new(),
        }
    }

    pub fn state(&self) -> ListState {
        self.state
    }

    /// Tokens of the last completed fetch, native asset first.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// USD total of [`Self::tokens`], two decimals.
    pub fn total(&self) -> &str {
        &self.total
    }

    /// Connected address and chain, if any.
    pub fn connection(&self) -> Option<(Address, Chain)> {
        self.connection
    }

    /// Applies a single event, returning the fetch to run if new data is needed.
    pub fn handle(&mut self, event: ListEvent) -> Option<FetchRequest> {
        match event {
            ListEvent::Connected { address, chain } => {
                self.connection = Some((address, chain));
                self.begin_fetch()
            }
            ListEvent::AddressChanged(new_address) => match self.connection.as_mut() {
                Some((address, _)) => {
                    *address = new_address;
                    self.begin_fetch()
                }
                None => {
                    log::debug!("Ignoring address change while disconnected.");
                    None
                }
            },
            ListEvent::ChainChanged(new_chain) => match self.connection.as_mut() {
                Some((_, chain)) => {
                    *chain = new_chain;
                    self.begin_fetch()
                }
                None => {
                    log::debug!("Ignoring chain change while disconnected.");
                    None
                }
            },
            ListEvent::BalancesChanged => {
                if self.connection.is_some() {
                    self.begin_fetch()
                } else {
                    None
                }
            }
            ListEvent::Disconnected => {
                self.disconnect();
                None
            }
            ListEvent::Fetched {
                generation,
                balances,
            } => {
                self.complete_fetch(generation, &balances);
                None
            }
        }
    }

    /// Queues an event, see [`Self::process`].
    pub fn push(&mut self, event: ListEvent) {
        self.queue.push_back(event);
    }

    /// Applies all queued events in order.
    ///
    /// Returns the fetch for the latest snapshot, if the list is left loading.
    pub fn process(&mut self) -> Option<FetchRequest> {
        let mut request = None;
        while let Some(event) = self.queue.pop_front() {
            if let Some(next) = self.handle(event) {
                request = Some(next);
            }
        }

        request.filter(|r| self.state == ListState::Loading && r.generation == self.generation)
    }

    /// Processes queued events and runs the resulting fetch against `source`.
    pub async fn run<S: BalanceSource + ?Sized>(&mut self, source: &S) {
        if let Some(request) = self.process() {
            let balances = fetch_balances(source, &request).await;
            self.handle(ListEvent::Fetched {
                generation: request.generation,
                balances,
            });
        }
    }

    /// Queues `event` and runs it, see [`Self::run`].
    pub async fn apply<S: BalanceSource + ?Sized>(&mut self, source: &S, event: ListEvent) {
        self.push(event);
        self.run(source).await;
    }

    /// Activates the token at `index`, passing it to `on_select`.
    ///
    /// Tokens can only be selected from a loaded list; returns whether `on_select` was called.
    pub fn activate<F: FnOnce(&Token)>(&self, index: usize, on_select: F) -> bool {
        if self.state != ListState::Loaded {
            log::debug!("Selection ignored, list is {:?}.", self.state);
            return false;
        }

        match self.tokens.get(index) {
            Some(token) => {
                on_select(token);
                true
            }
            None => false,
        }
    }

    /// Returns the index of the token with the given symbol, ignoring case.
    pub fn position(&self, symbol: &str) -> Option<usize> {
        self.tokens
            .iter()
            .position(|token| token.symbol.eq_ignore_ascii_case(symbol))
    }

    fn begin_fetch(&mut self) -> Option<FetchRequest> {
        let (address, chain) = self.connection?;
        self.generation += 1;
        self.state = ListState::Loading;

        Some(FetchRequest {
            generation: self.generation,
            address,
            chain,
        })
    }

    fn complete_fetch(&mut self, generation: u64, balances: &RawBalances) {
        if self.state != ListState::Loading || generation != self.generation {
            log::debug!(
                "Discarding balances of generation {} (current {}, {:?}).",
                generation,
                self.generation,
                self.state
            );
            return;
        }
        let Some((address, chain)) = self.connection else {
            return;
        };

        self.tokens = compute_token_list(Some(address), &chain, balances);
        self.total = compute_usd_total(&self.tokens, &self.prices);
        self.state = ListState::Loaded;
    }

    fn disconnect(&mut self) {
        // in-flight fetches belong to an older generation from now on
        self.generation += 1;
        self.connection = None;
        self.tokens.clear();
        self.total = ZERO_TOTAL.to_string();
        self.state = ListState::Disconnected;
    }
}

impl Default for TokenList {
    fn default() -> Self {
        Self::new(PriceTable::default())
    }
}
