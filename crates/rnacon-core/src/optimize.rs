//! Best-of-N selection over independent randomized builds.

/// Anything the optimization loop can rank. Lower is better.
pub trait Ranked {
    fn score(&self) -> i32;
}

/// Run `build` `iterations` times (at least once) and keep the lowest score.
///
/// Ties keep the earliest trial. The first failing trial aborts the loop and
/// its error is returned.
pub fn best_of<T, E, F>(iterations: usize, mut build: F) -> Result<T, E>
where
    T: Ranked,
    F: FnMut() -> Result<T, E>,
{
    let mut best = build()?;
    log::debug!("trial 1/{}: score {}", iterations.max(1), best.score());

    for trial in 2..=iterations {
        let candidate = build()?;
        log::debug!("trial {trial}/{iterations}: score {}", candidate.score());
        if candidate.score() < best.score() {
            best = candidate;
        }
    }

    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Trial {
        id: usize,
        score: i32,
    }

    impl Ranked for Trial {
        fn score(&self) -> i32 {
            self.score
        }
    }

    fn scripted(scores: &[i32]) -> impl FnMut() -> Result<Trial, String> + '_ {
        let mut next = 0;
        move || {
            let trial = Trial {
                id: next,
                score: scores[next],
            };
            next += 1;
            Ok(trial)
        }
    }

    #[test]
    fn test_keeps_lowest() {
        let scores = [5, 3, 4, 2, 6];
        let best = best_of(5, scripted(&scores)).unwrap();
        assert_eq!(best, Trial { id: 3, score: 2 });
        assert!(scores.iter().all(|s| best.score <= *s));
    }

    #[test]
    fn test_ties_keep_earliest() {
        let best = best_of(4, scripted(&[3, 2, 2, 2])).unwrap();
        assert_eq!(best.id, 1);
    }

    #[test]
    fn test_runs_exactly_n_trials() {
        let mut calls = 0;
        let _ = best_of::<_, String, _>(7, || {
            calls += 1;
            Ok(Trial { id: calls, score: 1 })
        });
        assert_eq!(calls, 7);
    }

    #[test]
    fn test_zero_or_one_iteration_runs_once() {
        for iterations in [0, 1] {
            let mut calls = 0;
            let best = best_of::<_, String, _>(iterations, || {
                calls += 1;
                Ok(Trial { id: calls, score: 9 })
            })
            .unwrap();
            assert_eq!(calls, 1);
            assert_eq!(best.id, 1);
        }
    }

    #[test]
    fn test_failure_aborts() {
        let mut calls = 0;
        let result: Result<Trial, String> = best_of(5, || {
            calls += 1;
            if calls == 2 {
                Err("missing".to_string())
            } else {
                Ok(Trial { id: calls, score: 1 })
            }
        });
        assert_eq!(result, Err("missing".to_string()));
        assert_eq!(calls, 2);
    }
}
