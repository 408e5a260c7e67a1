use super::*;

pub(super) fn parse_node<S: EventSource>(parser: &mut Parser<S>) -> Result<Node, EmbedYamlError> {
    let event = parser.bump()?;
    build_node(parser, event)
}

fn build_node<S: EventSource>(parser: &mut Parser<S>, event: Event) -> Result<Node, EmbedYamlError> {
    match event {
        // Stored as raw text; interpretation happens in `Node::parse`.
        Event::Scalar(text) => Ok(Node::Scalar(text)),
        Event::SequenceStart => parse_sequence(parser),
        Event::MappingStart => parse_mapping(parser),
        other => Err(parser.error(
            format!("Unexpected {:?} where a node was expected", other),
            "Expected a scalar, sequence or mapping",
            207,
        )),
    }
}

fn parse_sequence<S: EventSource>(parser: &mut Parser<S>) -> Result<Node, EmbedYamlError> {
    let mut items = Vec::new();

    loop {
        match parser.bump()? {
            Event::SequenceEnd => break,
            event => items.push(build_node(parser, event)?),
        }
    }

    Ok(Node::Sequence(items))
}

fn parse_mapping<S: EventSource>(parser: &mut Parser<S>) -> Result<Node, EmbedYamlError> {
    let mut entries = Vec::new();

    loop {
        let key = match parser.bump()? {
            Event::MappingEnd => break,
            event => match build_node(parser, event)? {
                Node::Scalar(text) => text,
                other => {
                    return Err(parser.error(
                        format!("Only scalar keys supported, found a {:?} key", other.kind()),
                        "Use plain text as mapping keys",
                        208,
                    ));
                }
            },
        };
        // Duplicate keys are kept in source order.
        let value = parse_node(parser)?;
        entries.push((key, value));
    }

    Ok(Node::Map(entries))
}
