use super::*;

pub(super) fn parse_document<S: EventSource>(parser: &mut Parser<S>) -> Result<Node, EmbedYamlError> {
    parser.expect(Event::StreamStart, 203)?;
    parser.expect(Event::DocumentStart, 204)?;
    let root = value::parse_node(parser)?;
    parser.expect(Event::DocumentEnd, 205)?;
    parser.expect(Event::StreamEnd, 206)?;
    Ok(root)
}
