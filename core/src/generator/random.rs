use super::*;

/// Generation strategy that deals uniformly shuffled pairs, reproducible from its seed.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomBoardGenerator {
    seed: u64,
}

impl RandomBoardGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl BoardGenerator for RandomBoardGenerator {
    fn generate(self, size: BoardSize) -> Board {
        use rand::rngs::SmallRng;
        use rand::seq::{IndexedRandom, SliceRandom};
        use rand::{Rng, SeedableRng};

        let pair_count = usize::from(size.pair_count());
        let mut rng = SmallRng::seed_from_u64(self.seed);

        let mut symbols = SYMBOLS;
        symbols.shuffle(&mut rng);

        if pair_count > symbols.len() {
            log::warn!(
                "{} pairs requested but only {} symbols exist, reusing symbols with other colors",
                pair_count,
                symbols.len()
            );
        }

        let mut dealt: Vec<Card> = Vec::with_capacity(pair_count);
        for i in 0..pair_count {
            let symbol = symbols[i % symbols.len()];
            let color = if i < symbols.len() {
                CardColor::ALL[rng.random_range(0..CardColor::ALL.len())]
            } else {
                // a reused symbol must not repeat a color it already has
                let free: Vec<CardColor> = CardColor::ALL
                    .into_iter()
                    .filter(|&color| !dealt.contains(&Card::new(symbol, color)))
                    .collect();
                free.choose(&mut rng)
                    .copied()
                    .unwrap_or_else(|| CardColor::ALL[rng.random_range(0..CardColor::ALL.len())])
            };
            dealt.push(Card::new(symbol, color));
        }

        let mut deck: Vec<Card> = dealt.iter().flat_map(|&card| [card, card]).collect();
        deck.shuffle(&mut rng);
        log::trace!("dealt {} cards for a {} board", deck.len(), size);

        Board::from_cards(size, deck).expect("layout should hold every pair twice")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn pair_counts(board: &Board) -> HashMap<(char, CardColor), usize> {
        let mut counts = HashMap::new();
        for (_, card) in board.iter() {
            *counts.entry((card.symbol(), card.color())).or_insert(0) += 1;
        }
        counts
    }

    #[test]
    fn every_valid_size_deals_exact_pairs() {
        for rows in 2..=10 {
            for cols in 2..=10 {
                let Ok(size) = BoardSize::new(rows, cols) else {
                    continue;
                };
                let board = RandomBoardGenerator::new(rows as u64 * 31 + cols as u64).generate(size);

                assert_eq!(board.total_cells(), size.total_cells());
                assert_eq!(board.size(), size);
                let counts = pair_counts(&board);
                assert_eq!(counts.len(), usize::from(size.pair_count()));
                assert!(counts.values().all(|&count| count == 2), "{size}: {counts:?}");
                assert!(board.iter().all(|(_, card)| !card.is_revealed()));
            }
        }
    }

    #[test]
    fn symbols_are_distinct_while_the_alphabet_lasts() {
        let board = RandomBoardGenerator::new(7).generate(BoardSize::PRESETS[2]);
        let symbols: std::collections::HashSet<char> =
            board.iter().map(|(_, card)| card.symbol()).collect();
        assert_eq!(symbols.len(), 32);
    }

    #[test]
    fn same_seed_same_board() {
        let size = BoardSize::PRESETS[1];
        let first = RandomBoardGenerator::new(42).generate(size);
        let second = RandomBoardGenerator::new(42).generate(size);
        assert_eq!(first, second);
    }

    #[test]
    fn different_seeds_shuffle_differently() {
        let size = BoardSize::PRESETS[2];
        let boards: Vec<Board> = (0..4)
            .map(|seed| RandomBoardGenerator::new(seed).generate(size))
            .collect();
        assert!(boards.windows(2).any(|pair| pair[0] != pair[1]));
    }
}
