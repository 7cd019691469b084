//! Dealer and game integration tests.

use crupier::Card::{
    self, Ace, Eight, Five, Four, Jack, King, Nine, Queen, Seven, Six, Ten, Three, Two,
};
use crupier::{
    Dealer, Deck, DeckError, Game, Hand, HandOutcome, Player, TableRules, hand_beats,
    player_wins_dealer,
};

fn hand(cards: &[Card]) -> Hand {
    Hand::from_cards(cards)
}

fn dealer(cards: &[Card], deck: &[Card]) -> Dealer {
    Dealer::new(hand(cards), Deck::from_cards(deck))
}

fn player(name: &str, cards: &[Card]) -> Player {
    Player::new(name, hand(cards))
}

#[test]
fn dealer_below_seventeen_draws_from_deck() {
    let mut dealer = dealer(&[Five, Three], &[Two, Queen]);
    assert_eq!(dealer.hand().unwrap().value(), 20);
}

#[test]
fn dealer_hand_is_idempotent() {
    let mut dealer = dealer(&[Five, Three], &[Two, Queen, Ace, Ace]);
    let first = dealer.hand().unwrap().clone();
    let second = dealer.hand().unwrap().clone();
    assert_eq!(first.value(), 20);
    assert_eq!(first, second);
    assert_eq!(dealer.cards_remaining(), 2);
}

#[test]
fn dealer_at_seventeen_does_not_draw() {
    let mut dealer = dealer(&[Ten, Seven], &[Four]);
    assert_eq!(dealer.hand().unwrap().len(), 2);
    assert_eq!(dealer.cards_remaining(), 1);
}

#[test]
fn dealer_exhaustion_propagates() {
    let mut dealer = dealer(&[Five, Three], &[Two]);
    assert_eq!(dealer.hand(), Err(DeckError::Exhausted));

    let mut game = Game::new(
        self::dealer(&[Two, Three], &[]),
        vec![player("Player1", &[Ten, Nine])],
    );
    assert_eq!(game.winners().unwrap_err(), DeckError::Exhausted);
    assert_eq!(game.showdown().unwrap_err(), DeckError::Exhausted);
}

#[test]
fn custom_stand_value() {
    let rules = TableRules::default().with_dealer_stands_at(19);
    let mut dealer = Dealer::with_rules(hand(&[Ten, Seven]), Deck::from_cards(&[Two]), rules);
    assert_eq!(dealer.hand().unwrap().value(), 19);
}

#[test]
fn player_wins_dealer_cases() {
    let mut house = dealer(&[Ten, Six, Five], &[]);
    assert!(player_wins_dealer(&mut house, &player("Player", &[Ace, Jack])).unwrap());

    let mut house = dealer(&[Nine, Ten], &[]);
    assert!(!player_wins_dealer(&mut house, &player("Player", &[Nine, Eight])).unwrap());
}

#[test]
fn win_predicate_precedence() {
    // Blackjack against blackjack is a tie, and ties lose.
    assert!(!hand_beats(&hand(&[Ace, King]), &hand(&[Ace, Queen])));
    // A busted player loses even when the dealer busts.
    assert!(!hand_beats(&hand(&[Ten, Six, Nine]), &hand(&[Ten, Five, King])));
    // Any live hand beats a busted dealer.
    assert!(hand_beats(&hand(&[Ten, Six, Nine]), &hand(&[Two, Three])));
    // Three-card 21 does not beat a dealer 21.
    assert!(!hand_beats(&hand(&[Ten, Six, Five]), &hand(&[Seven, Four, Jack])));
}

#[test]
fn one_player_loses_to_drawing_dealer() {
    let mut game = Game::new(
        dealer(&[Five, Three], &[Two, Queen]),
        vec![player("Player1", &[Two, Four, Two, Ace])],
    );
    assert!(game.winners().unwrap().is_empty());
}

#[test]
fn three_players_against_standing_dealer() {
    let mut game = Game::new(
        dealer(&[Six, Jack, Four], &[Jack, Two]),
        vec![
            player("Player1", &[Ace, Queen]),
            player("Player2", &[King, King, King]),
            player("Player3", &[Seven, Three, Jack]),
        ],
    );
    assert_eq!(game.winner_names().unwrap(), ["Player1"]);
    assert_eq!(game.dealer().cards_remaining(), 2);
}

#[test]
fn five_players_against_drawing_dealer() {
    let mut game = Game::new(
        dealer(&[Six, Four], &[Jack, Two]),
        vec![
            player("Player1", &[King, King, King]),
            player("Player2", &[Queen, Ace]),
            player("Player3", &[Four, Ten, Seven]),
            player("Player4", &[Ace, Jack]),
            player("Player5", &[Ace, Five, Four]),
        ],
    );
    assert_eq!(
        game.winner_names().unwrap(),
        ["Player2", "Player3", "Player4"]
    );
}

#[test]
fn showdown_matches_winners() {
    let mut game = Game::new(
        dealer(&[Six, Four], &[Jack, Two]),
        vec![
            player("Player1", &[King, King, King]),
            player("Player2", &[Queen, Ace]),
            player("Player3", &[Four, Ten, Seven]),
            player("Player4", &[Nine, Ten]),
            player("Player5", &[Ace, Five, Four]),
        ],
    );

    let result = game.showdown().unwrap();
    assert_eq!(result.dealer_value, 20);
    assert!(!result.dealer_bust);
    assert!(!result.dealer_blackjack);

    let outcomes: Vec<_> = result.players.iter().map(|p| p.outcome).collect();
    assert_eq!(
        outcomes,
        [
            HandOutcome::Bust,
            HandOutcome::Blackjack,
            HandOutcome::Win,
            HandOutcome::Lose,
            HandOutcome::Lose,
        ]
    );
    assert_eq!(result.players[2].player_value, 21);

    let names: Vec<_> = result.winner_names().collect();
    assert_eq!(names, game.winner_names().unwrap());
}

#[test]
fn showdown_with_busted_dealer() {
    let mut game = Game::new(
        dealer(&[Ten, Six], &[King]),
        vec![player("Player1", &[Two, Three]), player("Player2", &[Ten, Nine, Five])],
    );

    let result = game.showdown().unwrap();
    assert!(result.dealer_bust);
    assert_eq!(result.players[0].outcome, HandOutcome::Win);
    assert_eq!(result.players[1].outcome, HandOutcome::Bust);
}
