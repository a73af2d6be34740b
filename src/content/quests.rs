/// Difficulty tier of a quest, used for display ordering and filtering
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }
}

/// A single coding lesson/challenge unit with an embedded quiz
///
/// Quests are immutable content compiled into the binary. IDs are stable and
/// referenced from progress records, so renaming one is a breaking change.
pub struct Quest {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub difficulty: Difficulty,
    pub xp_reward: u32,
    /// Lesson text shown before the challenge, markdown
    pub lesson: &'static str,
    /// Code the editor is seeded with
    pub starter_code: &'static str,
    /// What a correct solution must do; also drives AI grading
    pub objective: &'static str,
    pub quiz: Quiz,
}

pub struct Quiz {
    pub questions: &'static [QuizQuestion],
    /// Minimum number of correct answers to pass
    pub pass_score: usize,
}

pub struct QuizQuestion {
    pub prompt: &'static str,
    pub options: &'static [&'static str],
    /// Index into `options` of the correct answer
    pub answer: usize,
}

/// The full quest catalog in display order
pub fn all_quests() -> &'static [Quest] {
    QUESTS
}

/// Look up a quest by its stable ID
pub fn quest_by_id(id: &str) -> Option<&'static Quest> {
    QUESTS.iter().find(|q| q.id == id)
}

static QUESTS: &[Quest] = &[
    Quest {
        id: "intro-to-ml",
        title: "What Is Machine Learning?",
        description: "Write your first learning program: a model that improves from data.",
        difficulty: Difficulty::Beginner,
        xp_reward: 100,
        lesson: "\
Machine learning is programming with data instead of rules. Rather than \
writing the logic for a task by hand, you show an algorithm examples of \
inputs and the outputs you expect, and it finds the pattern itself.\n\n\
The three ingredients are always the same: **data** (the examples), a \
**model** (a function with adjustable parameters), and a **loss** (a number \
measuring how wrong the model currently is). Training is the loop that \
nudges the parameters to make the loss smaller.\n\n\
In this quest you will implement the simplest possible learner: one that \
predicts the mean of its training targets. It sounds trivial, but it is a \
real baseline used in practice, and it already has the fit/predict shape \
every model in scikit-learn follows.",
        starter_code: "\
class MeanPredictor:\n\
    def fit(self, targets):\n\
        # TODO: remember the mean of the targets\n\
        pass\n\
\n\
    def predict(self):\n\
        # TODO: return the remembered mean\n\
        pass\n",
        objective: "Implement MeanPredictor so that fit stores the arithmetic mean of \
the given targets and predict returns it. Empty input may raise or return 0.",
        quiz: Quiz {
            questions: &[
                QuizQuestion {
                    prompt: "What does a loss function measure?",
                    options: &[
                        "How long training takes",
                        "How wrong the model's predictions currently are",
                        "How much data is available",
                    ],
                    answer: 1,
                },
                QuizQuestion {
                    prompt: "Training a model means...",
                    options: &[
                        "Writing if/else rules by hand",
                        "Adjusting parameters to reduce the loss on examples",
                        "Collecting more data",
                    ],
                    answer: 1,
                },
                QuizQuestion {
                    prompt: "Why is predicting the mean a useful model at all?",
                    options: &[
                        "It is the most accurate model known",
                        "It serves as a baseline other models must beat",
                        "It needs no data",
                    ],
                    answer: 1,
                },
            ],
            pass_score: 2,
        },
    },
    Quest {
        id: "linear-regression",
        title: "Fitting a Line",
        description: "Implement least-squares linear regression from scratch.",
        difficulty: Difficulty::Beginner,
        xp_reward: 150,
        lesson: "\
Linear regression models a target as a weighted sum of inputs plus a bias: \
`y = w * x + b`. For one feature, the best-fit line under squared error has \
a closed-form solution: the slope is the covariance of x and y divided by \
the variance of x, and the intercept follows from the means.\n\n\
Squared error is chosen because it penalizes large mistakes heavily and \
makes the optimization smooth. Once you can fit a line you already have the \
core idea behind far bigger models: pick a parametric function, define a \
loss, and solve for the parameters that minimize it.",
        starter_code: "\
def fit_line(xs, ys):\n\
    \"\"\"Return (slope, intercept) minimizing squared error.\"\"\"\n\
    # TODO: compute means, covariance and variance\n\
    pass\n",
        objective: "fit_line must return the least-squares slope and intercept for the \
given points: slope = cov(x, y) / var(x), intercept = mean(y) - slope * mean(x).",
        quiz: Quiz {
            questions: &[
                QuizQuestion {
                    prompt: "In y = w * x + b, what is b called?",
                    options: &["The bias (intercept)", "The slope", "The loss"],
                    answer: 0,
                },
                QuizQuestion {
                    prompt: "Why square the errors instead of just summing them?",
                    options: &[
                        "Squaring is faster to compute",
                        "Positive and negative errors would cancel; squaring also punishes large misses",
                        "It makes the model nonlinear",
                    ],
                    answer: 1,
                },
                QuizQuestion {
                    prompt: "The least-squares slope for one feature equals...",
                    options: &[
                        "var(x) / cov(x, y)",
                        "cov(x, y) / var(x)",
                        "mean(y) / mean(x)",
                    ],
                    answer: 1,
                },
            ],
            pass_score: 2,
        },
    },
    Quest {
        id: "classification-basics",
        title: "Drawing the Line: Classification",
        description: "Build a k-nearest-neighbors classifier.",
        difficulty: Difficulty::Intermediate,
        xp_reward: 150,
        lesson: "\
Classification predicts a label instead of a number. The k-nearest-neighbors \
algorithm is the most direct approach imaginable: to classify a point, find \
the k training points closest to it and take a majority vote of their \
labels.\n\n\
kNN has no training phase at all; the \"model\" is the data. That makes it a \
great lens on the real questions of classification: how do you measure \
distance, how do you break ties, and how does the choice of k trade off \
noise sensitivity (small k) against blurring class boundaries (large k)?",
        starter_code: "\
def classify(point, examples, k=3):\n\
    \"\"\"examples: list of (point, label). Return the majority label\n\
    among the k nearest examples by Euclidean distance.\"\"\"\n\
    # TODO: sort examples by distance to `point`, vote among first k\n\
    pass\n",
        objective: "classify must compute Euclidean distances from `point` to every \
example, select the k nearest, and return the most common label among them.",
        quiz: Quiz {
            questions: &[
                QuizQuestion {
                    prompt: "What does kNN do at training time?",
                    options: &[
                        "Fits weights by gradient descent",
                        "Nothing beyond storing the examples",
                        "Builds a decision tree",
                    ],
                    answer: 1,
                },
                QuizQuestion {
                    prompt: "A very small k makes the classifier...",
                    options: &[
                        "More sensitive to noisy individual examples",
                        "Always more accurate",
                        "Unable to classify at all",
                    ],
                    answer: 0,
                },
                QuizQuestion {
                    prompt: "Classification differs from regression because it predicts...",
                    options: &["A continuous number", "A discrete label", "A probability only"],
                    answer: 1,
                },
            ],
            pass_score: 2,
        },
    },
    Quest {
        id: "neural-networks",
        title: "Neurons That Learn",
        description: "Implement a single artificial neuron with a step activation.",
        difficulty: Difficulty::Intermediate,
        xp_reward: 200,
        lesson: "\
An artificial neuron computes a weighted sum of its inputs, adds a bias, and \
passes the result through an activation function. Stack enough of them in \
layers and you get a neural network; but everything interesting is already \
visible in one neuron.\n\n\
The perceptron learning rule is beautifully simple: present an example, and \
if the neuron's output is wrong, shift each weight toward the correct answer \
in proportion to that input. Repeat over the dataset until nothing changes. \
For linearly separable data this provably converges.\n\n\
Activations are what give networks their expressive power: without a \
nonlinearity, stacking layers collapses into a single linear map.",
        starter_code: "\
def neuron(inputs, weights, bias):\n\
    \"\"\"Step-activated neuron: return 1 if the weighted sum plus bias\n\
    is positive, else 0.\"\"\"\n\
    # TODO: weighted sum + bias, then step activation\n\
    pass\n",
        objective: "neuron must return 1 when dot(inputs, weights) + bias > 0 and 0 \
otherwise, for arbitrary-length input/weight lists of equal length.",
        quiz: Quiz {
            questions: &[
                QuizQuestion {
                    prompt: "What would a multi-layer network without nonlinear activations compute?",
                    options: &[
                        "Any function",
                        "Only a single linear transformation",
                        "Only step functions",
                    ],
                    answer: 1,
                },
                QuizQuestion {
                    prompt: "The perceptron rule updates weights when...",
                    options: &[
                        "The prediction is wrong",
                        "After every example regardless",
                        "Only at the end of training",
                    ],
                    answer: 0,
                },
                QuizQuestion {
                    prompt: "A neuron's raw output before activation is...",
                    options: &[
                        "The product of all inputs",
                        "A weighted sum of inputs plus a bias",
                        "The maximum input",
                    ],
                    answer: 1,
                },
            ],
            pass_score: 2,
        },
    },
    Quest {
        id: "overfitting-and-regularization",
        title: "The Overfitting Trap",
        description: "Detect overfitting with a train/validation split.",
        difficulty: Difficulty::Advanced,
        xp_reward: 200,
        lesson: "\
A model that memorizes its training data can score perfectly on it and still \
be useless: it has fit the noise, not the signal. This is overfitting, and it \
is the central failure mode of machine learning.\n\n\
The defense is to hold data back. Split your examples into a training set \
the model may learn from and a validation set it never sees. A large gap \
between training accuracy and validation accuracy is the signature of \
overfitting; regularization (penalizing large weights, limiting model \
capacity, stopping early) narrows the gap at the cost of some training \
performance.\n\n\
In this quest you implement the split itself, the one tool every \
practitioner reaches for first.",
        starter_code: "\
def train_val_split(examples, val_fraction=0.2):\n\
    \"\"\"Split examples into (train, validation) keeping order.\n\
    The LAST val_fraction of the list becomes the validation set.\"\"\"\n\
    # TODO: compute the cut index and slice\n\
    pass\n",
        objective: "train_val_split must place the final val_fraction of the examples \
(rounded down, at least one element when the list is non-empty) into the \
validation set and the rest into the training set, preserving order.",
        quiz: Quiz {
            questions: &[
                QuizQuestion {
                    prompt: "High training accuracy with low validation accuracy indicates...",
                    options: &["Underfitting", "Overfitting", "A perfect model"],
                    answer: 1,
                },
                QuizQuestion {
                    prompt: "Why must the validation set stay unseen during training?",
                    options: &[
                        "To make training faster",
                        "So it estimates performance on genuinely new data",
                        "Because it is usually corrupted",
                    ],
                    answer: 1,
                },
                QuizQuestion {
                    prompt: "Regularization typically trades...",
                    options: &[
                        "Training fit for better generalization",
                        "Memory for speed",
                        "Labels for features",
                    ],
                    answer: 0,
                },
            ],
            pass_score: 2,
        },
    },
    Quest {
        id: "model-evaluation",
        title: "Beyond Accuracy",
        description: "Compute precision and recall from a confusion matrix.",
        difficulty: Difficulty::Advanced,
        xp_reward: 250,
        lesson: "\
Accuracy is a seductive but often misleading number. A fraud detector that \
always answers \"not fraud\" is 99.9% accurate and completely worthless. To \
see what a classifier actually does, count its four outcomes: true \
positives, false positives, true negatives, false negatives.\n\n\
From those counts, **precision** (TP / (TP + FP)) asks: of everything the \
model flagged, how much was real? **Recall** (TP / (TP + FN)) asks: of \
everything real, how much did the model catch? The two pull against each \
other, and which one matters more is a product decision, not a math one.",
        starter_code: "\
def precision_recall(predictions, labels):\n\
    \"\"\"Both lists contain 0/1. Return (precision, recall).\n\
    Define 0/0 as 0.0.\"\"\"\n\
    # TODO: count tp, fp, fn and apply the definitions\n\
    pass\n",
        objective: "precision_recall must count true/false positives and false \
negatives over the paired lists and return precision and recall, treating a \
zero denominator as 0.0.",
        quiz: Quiz {
            questions: &[
                QuizQuestion {
                    prompt: "Why can accuracy mislead on imbalanced data?",
                    options: &[
                        "It is hard to compute",
                        "Always predicting the majority class already scores high",
                        "It requires probabilities",
                    ],
                    answer: 1,
                },
                QuizQuestion {
                    prompt: "Precision is defined as...",
                    options: &["TP / (TP + FN)", "TP / (TP + FP)", "TN / (TN + FP)"],
                    answer: 1,
                },
                QuizQuestion {
                    prompt: "A spam filter that never flags anything has...",
                    options: &[
                        "Perfect precision by convention, zero recall",
                        "Zero precision, perfect recall",
                        "Perfect precision and recall",
                    ],
                    answer: 0,
                },
            ],
            pass_score: 2,
        },
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn quest_ids_are_unique() {
        let mut seen = HashSet::new();
        for quest in all_quests() {
            assert!(seen.insert(quest.id), "duplicate quest id: {}", quest.id);
        }
    }

    #[test]
    fn quiz_answers_are_in_range() {
        for quest in all_quests() {
            for question in quest.quiz.questions {
                assert!(
                    question.answer < question.options.len(),
                    "quest {} has an out-of-range answer index",
                    quest.id
                );
            }
            assert!(
                quest.quiz.pass_score <= quest.quiz.questions.len(),
                "quest {} requires more correct answers than it has questions",
                quest.id
            );
        }
    }

    #[test]
    fn lookup_by_id() {
        assert!(quest_by_id("neural-networks").is_some());
        assert!(quest_by_id("does-not-exist").is_none());
    }
}
