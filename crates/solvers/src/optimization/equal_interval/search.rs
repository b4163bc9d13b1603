use stride_core::{Objective, Observer};

use super::{
    Action, Bracket, Config, EvalPolicy, Error, Event, Solution, Status,
    bracket::{Grid, Rise},
};

/// Core equal-interval search shared by the scalar and directional forms.
///
/// The bracket must already be validated.
pub(crate) fn search<O, Obs>(
    objective: &O,
    bracket: Bracket,
    config: &Config,
    observer: &mut Obs,
) -> Result<Solution, Error>
where
    O: Objective<1>,
    Obs: Observer<Event, Action>,
{
    let mut sampler = Sampler {
        objective,
        observer,
        evals: 0,
    };

    let mut bracket = bracket;
    let mut iters = 0;
    let mut carried = None;

    while !bracket.is_converged(config.tolerance()) {
        if iters == config.max_iters() {
            tracing::warn!(iters, evals = sampler.evals, %bracket, "pass limit reached");
            return Err(Error::DidNotConverge {
                iters,
                evals: sampler.evals,
                bracket,
            });
        }

        let pass = iters + 1;
        let grid = bracket.grid(config.intervals());

        let (rise, left_value) = match sampler.scan(&grid, pass, carried.take())? {
            Scan::Rose { rise, left_value } => (rise, left_value),
            Scan::Stopped => {
                return Ok(Solution::new(
                    Status::StoppedByObserver,
                    bracket,
                    iters,
                    sampler.evals,
                ));
            }
            Scan::Descended => {
                tracing::warn!(pass, evals = sampler.evals, %bracket, "no rise inside bracket");
                return Err(Error::MinimumBeyondBracket {
                    bracket,
                    evals: sampler.evals,
                });
            }
        };

        let Some(narrowed) = bracket.narrow(&grid, rise) else {
            tracing::warn!(pass, evals = sampler.evals, %bracket, "bracket stopped shrinking");
            return Err(Error::DidNotConverge {
                iters,
                evals: sampler.evals,
                bracket,
            });
        };

        bracket = narrowed;
        iters = pass;
        tracing::debug!(pass, low = bracket.low(), high = bracket.high(), "bracket narrowed");

        let event = Event::Narrowed { pass, bracket };
        if let Some(Action::StopEarly) = sampler.observer.observe(&event) {
            return Ok(Solution::new(
                Status::StoppedByObserver,
                bracket,
                iters,
                sampler.evals,
            ));
        }

        if config.policy() == EvalPolicy::Reuse {
            carried = Some(left_value);
        }
    }

    let solution = Solution::new(Status::Converged, bracket, iters, sampler.evals);
    tracing::debug!(
        x = solution.x,
        iters = solution.iters,
        evals = solution.evals,
        "equal-interval search converged"
    );
    Ok(solution)
}

/// Outcome of scanning one pass's samples.
enum Scan {
    /// A sample was not lower than its predecessor.
    ///
    /// `left_value` is the objective at the narrowed bracket's left endpoint.
    Rose { rise: Rise, left_value: f64 },

    /// Every sample was lower than the one before it.
    Descended,

    /// The observer asked to stop.
    Stopped,
}

struct Sampler<'a, O, Obs> {
    objective: &'a O,
    observer: &'a mut Obs,
    evals: usize,
}

impl<O, Obs> Sampler<'_, O, Obs>
where
    O: Objective<1>,
    Obs: Observer<Event, Action>,
{
    /// Scans `grid` left to right until the objective stops decreasing.
    ///
    /// `first` is the already known value at the grid's first point, if any.
    fn scan(&mut self, grid: &Grid, pass: usize, first: Option<f64>) -> Result<Scan, Error> {
        let first = match first {
            Some(value) => value,
            None => match self.sample(grid.point(0), pass)? {
                Some(value) => value,
                None => return Ok(Scan::Stopped),
            },
        };

        let mut previous = first;
        let mut current = first;

        for i in 0..grid.len() - 1 {
            let Some(next) = self.sample(grid.point(i + 1), pass)? else {
                return Ok(Scan::Stopped);
            };

            if next >= current {
                let rise = Rise::at(i);
                let left_value = match rise {
                    Rise::Immediate => current,
                    Rise::After(_) => previous,
                };
                return Ok(Scan::Rose { rise, left_value });
            }

            previous = current;
            current = next;
        }

        Ok(Scan::Descended)
    }

    /// Evaluates the objective at `x` and reports it to the observer.
    ///
    /// Returns `None` if the observer asked to stop.
    fn sample(&mut self, x: f64, pass: usize) -> Result<Option<f64>, Error> {
        self.evals += 1;
        let value = self.objective.value(&[x]).map_err(Error::objective)?;
        if !value.is_finite() {
            return Err(Error::NonFiniteValue { x, value });
        }

        tracing::trace!(pass, x, value, "evaluated");

        let event = Event::Evaluated { pass, x, value };
        match self.observer.observe(&event) {
            Some(Action::StopEarly) => Ok(None),
            None => Ok(Some(value)),
        }
    }
}
