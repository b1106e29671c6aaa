use super::*;
use crate::BLINDS;
use crate::BLIND_BASE_MINUTES;
use crate::MAX_PLAYERS;
use std::time::Duration;

/// The full run of blind alerts for one game.
///
/// Blinds go up every `BLIND_BASE_MINUTES + players` minutes, starting at
/// the first amount the moment the game begins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    interval: Duration,
    alerts: Vec<Alert>,
}

/// A player count no table can seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TooManyPlayers(pub usize);

impl std::fmt::Display for TooManyPlayers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} players is more than the limit of {}", self.0, MAX_PLAYERS)
    }
}

impl std::error::Error for TooManyPlayers {}

impl TryFrom<usize> for Schedule {
    type Error = TooManyPlayers;
    fn try_from(players: usize) -> Result<Self, Self::Error> {
        if players > MAX_PLAYERS {
            return Err(TooManyPlayers(players));
        }
        let interval = Duration::from_secs((BLIND_BASE_MINUTES + players as u64) * 60);
        let alerts = BLINDS
            .iter()
            .enumerate()
            .map(|(i, &amount)| Alert {
                elapsed: interval * i as u32,
                amount,
            })
            .collect();
        Ok(Self { interval, alerts })
    }
}

impl Schedule {
    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }
}

impl IntoIterator for Schedule {
    type Item = Alert;
    type IntoIter = std::vec::IntoIter<Alert>;
    fn into_iter(self) -> Self::IntoIter {
        self.alerts.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minutes(alerts: &[Alert]) -> Vec<u64> {
        alerts.iter().map(|a| a.elapsed.as_secs() / 60).collect()
    }

    fn amounts(alerts: &[Alert]) -> Vec<u32> {
        alerts.iter().map(|a| a.amount).collect()
    }

    #[test]
    fn five_players() {
        let schedule = Schedule::try_from(5).unwrap();
        assert_eq!(schedule.interval(), Duration::from_secs(10 * 60));
        assert_eq!(
            minutes(schedule.alerts()),
            vec![0, 10, 20, 30, 40, 50, 60, 70, 80, 90, 100]
        );
        assert_eq!(
            amounts(schedule.alerts()),
            vec![100, 200, 300, 400, 500, 600, 800, 1000, 2000, 4000, 8000]
        );
    }

    #[test]
    fn seven_players() {
        let schedule = Schedule::try_from(7).unwrap();
        assert_eq!(schedule.interval(), Duration::from_secs(12 * 60));
        assert_eq!(minutes(&schedule.alerts()[..5]), vec![0, 12, 24, 36, 48]);
        assert_eq!(amounts(&schedule.alerts()[..5]), vec![100, 200, 300, 400, 500]);
    }

    #[test]
    fn strictly_increasing() {
        let schedule = Schedule::try_from(0).unwrap();
        assert_eq!(schedule.alerts().len(), BLINDS.len());
        assert!(
            schedule
                .alerts()
                .windows(2)
                .all(|w| w[0].elapsed < w[1].elapsed && w[0].amount < w[1].amount)
        );
    }

    #[test]
    fn largest_table() {
        let schedule = Schedule::try_from(MAX_PLAYERS).unwrap();
        let last = schedule.alerts().last().unwrap();
        assert_eq!(last.elapsed, schedule.interval() * 10);
        assert_eq!(last.amount, 8000);
    }

    #[test]
    fn oversized_tables_are_refused() {
        assert_eq!(
            Schedule::try_from(MAX_PLAYERS + 1),
            Err(TooManyPlayers(MAX_PLAYERS + 1))
        );
        assert_eq!(Schedule::try_from(1 << 58), Err(TooManyPlayers(1 << 58)));
        assert_eq!(
            Schedule::try_from(usize::MAX),
            Err(TooManyPlayers(usize::MAX))
        );
    }
}
