//! Integration tests for clause classification

use corecoding_core::{
    describe_argument, order_tag, resolve_lemma, ClassifierConfig, ClauseClassifier, Role,
    RoleMap, Sentence, SentenceBuilder, TreeNode, Word,
};

fn classify(config: ClassifierConfig, sentence: &Sentence, ord: usize) -> Vec<String> {
    let classifier = ClauseClassifier::new(config).unwrap();
    classifier
        .classify(&sentence.node(ord).unwrap())
        .iter()
        .map(|report| report.to_string())
        .collect()
}

#[test]
fn test_only_clause_relations_are_classified() {
    let relations = [
        "nsubj", "obj", "iobj", "obl", "amod", "nmod", "det", "case", "aux", "cop", "conj",
        "parataxis", "punct",
    ];
    for relation in relations {
        let sentence = SentenceBuilder::new()
            .word(Word::new(1, "head").upos("VERB").feats("VerbForm=Fin").deprel("root"))
            .word(Word::new(2, "x").upos("VERB").feats("VerbForm=Fin").head(1).deprel(relation))
            .build()
            .unwrap();
        assert!(
            classify(ClassifierConfig::default(), &sentence, 2).is_empty(),
            "{relation} should not be classified"
        );
    }

    for relation in ["csubj", "ccomp", "xcomp", "advcl", "acl", "acl:relcl", "advcl:cmp"] {
        let sentence = SentenceBuilder::new()
            .word(Word::new(1, "head").upos("VERB").feats("VerbForm=Fin").deprel("root"))
            .word(Word::new(2, "x").upos("VERB").head(1).deprel(relation))
            .build()
            .unwrap();
        assert!(
            !classify(ClassifierConfig::default(), &sentence, 2).is_empty(),
            "{relation} should be classified"
        );
    }
}

#[test]
fn test_finite_head_ignores_auxiliaries() {
    let sentence = SentenceBuilder::new()
        .word(Word::new(1, "to").upos("AUX").feats("VerbForm=Inf").head(2).deprel("aux"))
        .word(Word::new(2, "go").upos("VERB").feats("VerbForm=Fin").deprel("root"))
        .build()
        .unwrap();
    let lines = classify(ClassifierConfig::default(), &sentence, 2);
    assert_eq!(lines[0], "SUBJECT finite emptysubj");
}

#[test]
fn test_participial_auxiliary_makes_clause_finite() {
    let sentence = SentenceBuilder::new()
        .word(Word::new(1, "go").upos("VERB").deprel("root"))
        .word(Word::new(2, "been").upos("AUX").feats("VerbForm=Part").head(1).deprel("aux"))
        .build()
        .unwrap();
    let lines = classify(ClassifierConfig::default(), &sentence, 1);
    assert_eq!(lines[0], "SUBJECT finite emptysubj");
}

#[test]
fn test_unmarked_clause_without_verbform_test() {
    let sentence = SentenceBuilder::new()
        .word(Word::new(1, "go").upos("VERB").deprel("root"))
        .build()
        .unwrap();
    let config = ClassifierConfig::builder().verbform(false).build().unwrap();
    assert_eq!(
        classify(config, &sentence, 1),
        vec!["SUBJECT  emptysubj", "AGREEMENT  "]
    );
}

#[test]
fn test_end_to_end_pronominal_subject() {
    let sentence = SentenceBuilder::new()
        .sent_id("test-1")
        .text("I sleep")
        .word(
            Word::new(1, "I")
                .lemma("I")
                .upos("PRON")
                .feats("Case=Nom|Number=Sing|Person=1|PronType=Prs")
                .head(2)
                .deprel("nsubj"),
        )
        .word(
            Word::new(2, "sleep")
                .lemma("sleep")
                .upos("VERB")
                .feats("Mood=Ind|Number=Sing|Person=1|Tense=Pres|VerbForm=Fin")
                .deprel("root"),
        )
        .build()
        .unwrap();

    assert_eq!(
        classify(ClassifierConfig::default(), &sentence, 2),
        vec![
            "SUBJECT finite nsubj PRON+Nom SV",
            "AGREEMENT finite Number=Sing|Person=1",
        ]
    );
}

#[test]
fn test_adpositional_indirect_object_with_transliteration() {
    // Hindi-style: "raam ne siitaa ko kitaab dii"
    let sentence = SentenceBuilder::new()
        .word(Word::new(1, "राम").lemma("राम").upos("PROPN").feats("Case=Erg").head(5).deprel("nsubj"))
        .word(Word::new(2, "ने").upos("ADP").misc("Translit=NE").head(1).deprel("case"))
        .word(Word::new(3, "सीता").lemma("सीता").upos("PROPN").feats("Case=Dat").head(5).deprel("iobj"))
        .word(Word::new(4, "को").lemma("को").upos("ADP").misc("LTranslit=ko").head(3).deprel("case"))
        .word(
            Word::new(5, "दी")
                .lemma("दे")
                .upos("VERB")
                .feats("Gender=Fem|Number=Sing|VerbForm=Part")
                .deprel("root"),
        )
        .build()
        .unwrap();

    assert_eq!(
        classify(ClassifierConfig::default(), &sentence, 5),
        vec![
            "SUBJECT finite nsubj NOUN+ne+Erg SV",
            "IOBJECT iobj NOUN+ko+Dat SIV",
            "AGREEMENT finite Gender=Fem|Number=Sing",
        ]
    );
}

#[test]
fn test_public_component_functions() {
    let sentence = SentenceBuilder::new()
        .word(Word::new(1, "of").lemma("of").upos("ADP").head(2).deprel("case"))
        .word(Word::new(2, "cities").upos("NOUN").deprel("root"))
        .build()
        .unwrap();
    let noun = sentence.node(2).unwrap();
    assert_eq!(describe_argument(&noun), "NOUN+of+NoCase");
    assert_eq!(resolve_lemma(&sentence.node(1).unwrap()), "of");

    let mut roles = RoleMap::new();
    roles.register(Role::Verb, &noun);
    roles.insert(Role::Subject, 1);
    assert_eq!(order_tag(&roles), "SV");
    assert_eq!(noun.udeprel(), "root");
}
